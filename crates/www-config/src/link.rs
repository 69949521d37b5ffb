use serde::{Deserialize, Serialize};

/// A single entry in the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
  /// Display label.
  pub title: String,

  /// Target URL or root-relative path.
  pub href: String,

  /// Route patterns (e.g. `/learn/[...slug]`) for which the link is shown as
  /// active. [`None`] means the link is never highlighted by pattern.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub active_path_names: Option<Vec<String>>,

  /// Whether the link points off-site.
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub external: bool,
}

impl NavLink {
  /// Create an internal link with no active path patterns.
  #[must_use]
  pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
    Self {
      title:             title.into(),
      href:              href.into(),
      active_path_names: None,
      external:          false,
    }
  }

  /// Add a route pattern that marks this link as active.
  #[must_use]
  pub fn with_active_path(mut self, pattern: impl Into<String>) -> Self {
    self
      .active_path_names
      .get_or_insert_with(Vec::new)
      .push(pattern.into());
    self
  }

  /// Mark this link as pointing off-site.
  #[must_use]
  pub const fn external(mut self) -> Self {
    self.external = true;
    self
  }

  #[must_use]
  pub const fn is_external(&self) -> bool {
    self.external
  }

  /// Returns whether any active path pattern is configured.
  #[must_use]
  pub fn has_active_patterns(&self) -> bool {
    self
      .active_path_names
      .as_ref()
      .is_some_and(|patterns| !patterns.is_empty())
  }

  /// Active path patterns, empty when none are configured.
  #[must_use]
  pub fn active_patterns(&self) -> &[String] {
    self.active_path_names.as_deref().unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_new_link_defaults() {
    let link = NavLink::new("API", "/api/modules.html");
    assert!(!link.is_external());
    assert!(!link.has_active_patterns());
    assert!(link.active_patterns().is_empty());
    assert_eq!(link.active_path_names, None);
  }

  #[test]
  fn test_with_active_path_appends() {
    let link = NavLink::new("Docs", "/docs")
      .with_active_path("/docs/[[...slug]]")
      .with_active_path("/docs");
    assert!(link.has_active_patterns());
    assert_eq!(link.active_patterns(), ["/docs/[[...slug]]", "/docs"]);
  }

  #[test]
  fn test_empty_pattern_list_is_not_active() {
    let link = NavLink {
      active_path_names: Some(Vec::new()),
      ..NavLink::new("Blog", "/blog")
    };
    assert!(!link.has_active_patterns());
  }

  #[test]
  fn test_serialize_omits_defaults() {
    let link = NavLink::new("API", "/api/modules.html");
    let json = serde_json::to_value(&link).expect("serialize link");
    assert_eq!(
      json,
      serde_json::json!({ "title": "API", "href": "/api/modules.html" })
    );
  }

  #[test]
  fn test_serialize_uses_camel_case() {
    let link =
      NavLink::new("Learn", "/learn").with_active_path("/learn/[...slug]");
    let json = serde_json::to_value(&link).expect("serialize link");
    assert_eq!(json["activePathNames"][0], "/learn/[...slug]");
  }

  #[test]
  fn test_deserialize_external() {
    let link: NavLink = serde_json::from_str(
      r#"{ "title": "Contact", "href": "https://example.com", "external": true }"#,
    )
    .expect("deserialize link");
    assert!(link.is_external());
    assert_eq!(link.active_path_names, None);
  }
}
