use serde::{Deserialize, Serialize};

use crate::{
  copyright::{build_copyright, current_year},
  link::NavLink,
  social::Social,
  version::VersionEntry,
};

/// Navigation and metadata configuration for the documentation website.
///
/// [`SiteConfig`] is built once at startup, either from [`SiteConfig::builtin`]
/// or from a file (see [`SiteConfig::from_file`]), and then handed by
/// reference to whatever renders the header, footer and version switcher.
/// Nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
  /// Short display name of the site.
  pub name: String,

  /// Longer description, used for metadata.
  pub description: String,

  /// Footer copyright line. Files may omit it, in which case it is built
  /// from the load year.
  #[serde(default)]
  pub copyright: String,

  /// Top navigation links, in render order.
  #[serde(default)]
  pub links: Vec<NavLink>,

  /// Social and contact channels.
  pub social: Social,

  /// Documentation versions offered by the version switcher.
  #[serde(default)]
  pub versions: Vec<VersionEntry>,
}

impl SiteConfig {
  /// The Next.js for Drupal site configuration, with the copyright line
  /// built for `year`.
  #[must_use]
  pub fn builtin(year: i16) -> Self {
    Self {
      name:        "Next.js for Drupal".to_string(),
      description: "Everything you expect from Drupal. On a modern stack. Go \
                    headless without compromising features."
        .to_string(),
      copyright:   build_copyright(year),
      links:       vec![
        NavLink::new("Get Started", "/learn/quick-start")
          .with_active_path("/learn/[...slug]"),
        NavLink::new("Learn", "/learn").with_active_path("/learn/[...slug]"),
        NavLink::new("Docs", "/docs").with_active_path("/docs/[[...slug]]"),
        NavLink::new("Guides", "/guides").with_active_path("/guides/[...slug]"),
        NavLink::new("API", "/api/modules.html"),
        NavLink::new("Blog", "/blog").with_active_path("/blog/[...slug]"),
        NavLink::new(
          "Contact",
          "https://www.chapterthree.com/contact?utm_source=next-drupal&utm_medium=banner",
        )
        .external(),
      ],
      social:      Social {
        github:  "chapter-three/next-drupal".to_string(),
        contact: "https://www.chapterthree.com/contact".to_string(),
        twitter: "chapter_three".to_string(),
      },
      versions:    vec![
        VersionEntry::current("v2.0.0"),
        VersionEntry::hosted("v1.6.0", "https://v1.next-drupal.org"),
        VersionEntry::hosted("canary", "https://next.next-drupal.org"),
      ],
    }
  }

  /// The built-in configuration for the current calendar year.
  ///
  /// The year is read once here. A process that runs across a year boundary
  /// keeps the year it started with.
  #[must_use]
  pub fn current() -> Self {
    Self::builtin(current_year())
  }

  /// The version marked active, if any.
  #[must_use]
  pub fn active_version(&self) -> Option<&VersionEntry> {
    self.versions.iter().find(|v| v.active)
  }

  /// Links that point off-site.
  pub fn external_links(&self) -> impl Iterator<Item = &NavLink> {
    self.links.iter().filter(|link| link.is_external())
  }

  /// Look up a navigation link by its title.
  #[must_use]
  pub fn link(&self, title: &str) -> Option<&NavLink> {
    self.links.iter().find(|link| link.title == title)
  }
}
