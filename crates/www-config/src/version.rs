use serde::{Deserialize, Serialize};

/// A selectable documentation version in the version switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
  /// Version label, e.g. `v2.0.0` or a channel name such as `canary`.
  pub version: String,

  /// Whether this is the version served by the current site.
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub active: bool,

  /// Absolute URL of the site hosting this version. [`None`] means the
  /// current site.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
}

impl VersionEntry {
  /// The version served by this site.
  #[must_use]
  pub fn current(version: impl Into<String>) -> Self {
    Self {
      version: version.into(),
      active:  true,
      url:     None,
    }
  }

  /// A version hosted on another site.
  #[must_use]
  pub fn hosted(version: impl Into<String>, url: impl Into<String>) -> Self {
    Self {
      version: version.into(),
      active:  false,
      url:     Some(url.into()),
    }
  }

  /// Returns whether selecting this version stays on the current site.
  #[must_use]
  pub const fn is_current_site(&self) -> bool {
    self.url.is_none()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_current_entry() {
    let entry = VersionEntry::current("v2.0.0");
    assert!(entry.active);
    assert!(entry.is_current_site());
  }

  #[test]
  fn test_hosted_entry() {
    let entry = VersionEntry::hosted("canary", "https://next.next-drupal.org");
    assert!(!entry.active);
    assert!(!entry.is_current_site());
    assert_eq!(entry.url.as_deref(), Some("https://next.next-drupal.org"));
  }

  #[test]
  fn test_deserialize_defaults() {
    let entry: VersionEntry =
      serde_json::from_str(r#"{ "version": "v1.6.0" }"#).expect("parse entry");
    assert!(!entry.active);
    assert_eq!(entry.url, None);
  }
}
