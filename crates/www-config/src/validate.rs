use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::{error::ConfigError, site::SiteConfig};

/// Absolute `http(s)` URL with a host.
const ABSOLUTE_URL: &str = r"^https?://[^\s/?#]+(?:[/?#]\S*)?$";

/// Root-relative path, but not a protocol-relative `//host` URL.
const ROOT_RELATIVE: &str = r"^/(?:[^/\s]\S*)?$";

/// Route pattern made of literal, `[param]`, `[...param]` and `[[...param]]`
/// segments.
const ROUTE_PATTERN: &str = concat!(
  r"^/$|^(?:/(?:",
  r"[^/\[\]\s]+",
  r"|\[[A-Za-z_][A-Za-z0-9_]*\]",
  r"|\[\.\.\.[A-Za-z_][A-Za-z0-9_]*\]",
  r"|\[\[\.\.\.[A-Za-z_][A-Za-z0-9_]*\]\]",
  r"))+$"
);

static ABSOLUTE_URL_RE: LazyLock<Option<Regex>> =
  LazyLock::new(|| compile("ABSOLUTE_URL", ABSOLUTE_URL));
static ROOT_RELATIVE_RE: LazyLock<Option<Regex>> =
  LazyLock::new(|| compile("ROOT_RELATIVE", ROOT_RELATIVE));
static ROUTE_PATTERN_RE: LazyLock<Option<Regex>> =
  LazyLock::new(|| compile("ROUTE_PATTERN", ROUTE_PATTERN));

fn compile(name: &str, pattern: &str) -> Option<Regex> {
  Regex::new(pattern)
    .map_err(|e| log::error!("Failed to compile {name} regex: {e}"))
    .ok()
}

// A pattern that failed to compile matches nothing, so input is rejected.
fn is_match(re: &LazyLock<Option<Regex>>, haystack: &str) -> bool {
  re.as_ref().is_some_and(|re| re.is_match(haystack))
}

fn is_absolute_url(url: &str) -> bool {
  is_match(&ABSOLUTE_URL_RE, url)
}

fn is_root_relative(href: &str) -> bool {
  is_match(&ROOT_RELATIVE_RE, href)
}

fn is_link_target(href: &str) -> bool {
  is_root_relative(href) || is_absolute_url(href)
}

fn is_route_pattern(pattern: &str) -> bool {
  if !is_match(&ROUTE_PATTERN_RE, pattern) {
    return false;
  }
  // Catch-all segments must come last.
  let segments: Vec<&str> = pattern.split('/').collect();
  segments
    .iter()
    .take(segments.len().saturating_sub(1))
    .all(|segment| !segment.contains("..."))
}

impl SiteConfig {
  /// Check the configuration for shape errors.
  ///
  /// Stops at the first problem and reports it with the 1-based position of
  /// the offending link or version. Suspicious but harmless settings, such
  /// as an empty version list, are only logged.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::Validation`] if a required string is empty, a
  /// link target, version URL or route pattern is malformed, a version label
  /// is repeated, or more than one version is marked active.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.name.trim().is_empty() {
      return Err(invalid("Site name must not be empty"));
    }

    if self.links.is_empty() {
      log::warn!("No navigation links configured");
    }

    for (idx, link) in self.links.iter().enumerate() {
      let pos = idx + 1;
      if link.title.trim().is_empty() {
        return Err(invalid(format!("Navigation link #{pos}: empty title")));
      }
      if link.href.trim().is_empty() {
        return Err(invalid(format!(
          "Navigation link #{pos} ('{}'): empty href",
          link.title
        )));
      }
      if !is_link_target(&link.href) {
        return Err(invalid(format!(
          "Navigation link #{pos} ('{}'): '{}' is neither a root-relative \
           path nor an absolute http(s) URL",
          link.title, link.href
        )));
      }
      if link.external && is_root_relative(&link.href) {
        log::warn!(
          "Navigation link '{}' is marked external but points to {}",
          link.title,
          link.href
        );
      }
      for pattern in link.active_patterns() {
        if !is_route_pattern(pattern) {
          return Err(invalid(format!(
            "Navigation link #{pos} ('{}'): invalid active path pattern \
             '{pattern}'",
            link.title
          )));
        }
      }
    }

    if self.versions.is_empty() {
      log::warn!("No documentation versions configured");
    }

    let mut seen = HashSet::new();
    let mut active = None;
    for (idx, entry) in self.versions.iter().enumerate() {
      let pos = idx + 1;
      if entry.version.trim().is_empty() {
        return Err(invalid(format!("Version #{pos}: empty version label")));
      }
      if !seen.insert(entry.version.as_str()) {
        return Err(invalid(format!(
          "Version #{pos}: duplicate version label '{}'",
          entry.version
        )));
      }
      if let Some(ref url) = entry.url
        && !is_absolute_url(url)
      {
        return Err(invalid(format!(
          "Version #{pos} ('{}'): '{url}' is not an absolute http(s) URL",
          entry.version
        )));
      }
      if entry.active {
        if let Some(first) = active {
          return Err(invalid(format!(
            "Version #{pos} ('{}'): only one version may be active, '{first}' \
             is already active",
            entry.version
          )));
        }
        active = Some(entry.version.as_str());
      }
    }

    Ok(())
  }
}

fn invalid(message: impl Into<String>) -> ConfigError {
  ConfigError::Validation(message.into())
}
