use serde::{Deserialize, Serialize};

/// Social and contact channels shown in the footer.
///
/// Channels are fixed fields, so each can appear at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
  /// GitHub repository in `owner/name` form, or a full URL.
  pub github: String,

  /// Contact page URL.
  pub contact: String,

  /// Twitter handle without the leading `@`, or a full URL.
  pub twitter: String,
}

impl Social {
  /// URL of the GitHub repository.
  #[must_use]
  pub fn github_url(&self) -> String {
    profile_url("https://github.com", &self.github)
  }

  /// URL of the Twitter profile.
  #[must_use]
  pub fn twitter_url(&self) -> String {
    profile_url("https://twitter.com", self.twitter.trim_start_matches('@'))
  }
}

fn profile_url(base: &str, handle: &str) -> String {
  if handle.starts_with("https://") || handle.starts_with("http://") {
    handle.to_string()
  } else {
    format!("{base}/{}", handle.trim_start_matches('/'))
  }
}
