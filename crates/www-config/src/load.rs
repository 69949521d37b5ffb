use std::{fmt, fs, path::Path, str::FromStr};

use crate::{copyright::build_copyright, error::ConfigError, site::SiteConfig};

/// On-disk format of a site configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
  #[default]
  Toml,
  Json,
}

impl ConfigFormat {
  /// Detect the format from a file extension, ignoring case.
  #[must_use]
  pub fn from_path(path: &Path) -> Option<Self> {
    path
      .extension()
      .and_then(|ext| ext.to_str())
      .and_then(|ext| ext.parse().ok())
  }
}

impl FromStr for ConfigFormat {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "toml" => Ok(Self::Toml),
      "json" => Ok(Self::Json),
      _ => Err(format!("Unsupported config format: {s}")),
    }
  }
}

impl fmt::Display for ConfigFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Toml => write!(f, "toml"),
      Self::Json => write!(f, "json"),
    }
  }
}

impl SiteConfig {
  /// Load a site configuration from a TOML or JSON file.
  ///
  /// A missing `copyright` field is filled in with [`build_copyright`] for
  /// `year`. The loaded configuration is validated before it is returned.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::Config`] if the extension is missing or
  /// unsupported or the file cannot be read, [`ConfigError::TomlDe`] or
  /// [`ConfigError::Json`] if it cannot be parsed, and
  /// [`ConfigError::Validation`] if validation fails.
  pub fn from_file<P: AsRef<Path>>(
    path: P,
    year: i16,
  ) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path).ok_or_else(|| {
      ConfigError::Config(format!(
        "Unsupported or missing config file extension: {}",
        path.display()
      ))
    })?;

    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    log::debug!("Loading {format} site config from {}", path.display());

    // Parse and validation errors keep their variant; callers add the path.
    match format {
      ConfigFormat::Toml => Self::from_toml_str(&content, year),
      ConfigFormat::Json => Self::from_json_str(&content, year),
    }
  }

  /// Parse and validate a TOML site configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if the input is not valid TOML for this schema or if
  /// validation fails.
  pub fn from_toml_str(content: &str, year: i16) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(content)?;
    config.finish(year)
  }

  /// Parse and validate a JSON site configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if the input is not valid JSON for this schema or if
  /// validation fails.
  pub fn from_json_str(content: &str, year: i16) -> Result<Self, ConfigError> {
    let config: Self = serde_json::from_str(content)?;
    config.finish(year)
  }

  fn finish(mut self, year: i16) -> Result<Self, ConfigError> {
    if self.copyright.trim().is_empty() {
      self.copyright = build_copyright(year);
    }
    self.validate()?;
    Ok(self)
  }

  /// Serialize to pretty-printed TOML.
  ///
  /// # Errors
  ///
  /// Returns an error if serialization fails.
  pub fn to_toml_string(&self) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(self)?)
  }

  /// Serialize to pretty-printed JSON, in the shape page templates expect.
  ///
  /// # Errors
  ///
  /// Returns an error if serialization fails.
  pub fn to_json_string(&self) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  /// Serialize to the given format.
  ///
  /// # Errors
  ///
  /// Returns an error if serialization fails.
  pub fn to_string_as(
    &self,
    format: ConfigFormat,
  ) -> Result<String, ConfigError> {
    match format {
      ConfigFormat::Toml => self.to_toml_string(),
      ConfigFormat::Json => self.to_json_string(),
    }
  }

  /// Write the configuration to `path` in the given format.
  ///
  /// # Errors
  ///
  /// Returns an error if serialization or the write fails.
  pub fn write_file<P: AsRef<Path>>(
    &self,
    path: P,
    format: ConfigFormat,
  ) -> Result<(), ConfigError> {
    let path = path.as_ref();
    fs::write(path, self.to_string_as(format)?)?;
    log::info!("Wrote {format} site config to {}", path.display());
    Ok(())
  }
}
