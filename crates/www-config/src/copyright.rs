/// Holder named in the footer copyright line.
pub const COPYRIGHT_HOLDER: &str = "Chapter Three";

/// Build the footer copyright line for the given calendar year.
///
/// The year is taken as an argument rather than read from the clock so the
/// result is reproducible. Use [`current_year`] to get the year at startup.
#[must_use]
pub fn build_copyright(year: i16) -> String {
  format!("Copyright © {year} {COPYRIGHT_HOLDER}. All rights reserved.")
}

/// Current calendar year in the system time zone.
#[must_use]
pub fn current_year() -> i16 {
  jiff::Zoned::now().year()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_build_copyright_interpolates_year() {
    assert_eq!(
      build_copyright(2024),
      "Copyright © 2024 Chapter Three. All rights reserved."
    );
  }

  #[test]
  fn test_build_copyright_names_holder() {
    assert!(build_copyright(1999).contains(COPYRIGHT_HOLDER));
  }

  #[test]
  fn test_current_year_is_plausible() {
    let year = current_year();
    assert!(year >= 2024, "clock reports year {year}");
    assert_eq!(year.to_string().len(), 4);
  }
}
