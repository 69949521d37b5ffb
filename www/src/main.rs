use std::{
  fs,
  io::{self, Write},
  path::Path,
};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};
use www_config::{ConfigFormat, SiteConfig, current_year};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging before anything else can log
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  // The year is fixed for the lifetime of the process.
  let year = cli.year.unwrap_or_else(current_year);
  let site = load_site(&cli, year)?;

  // Handle subcommands
  match &cli.command {
    Commands::Show { format } => {
      let rendered = site.to_string_as(*format)?;
      let mut stdout = io::stdout().lock();
      writeln!(stdout, "{}", rendered.trim_end())?;
    },

    Commands::Check => check_site(&site, cli.config_file.is_some())?,

    Commands::Init {
      output,
      format,
      force,
    } => {
      init_site(&site, output, *format, *force)?;
    },
  }

  Ok(())
}

/// Build the site configuration from the config file, or the built-in one.
fn load_site(cli: &Cli, year: i16) -> Result<SiteConfig> {
  match cli.config_file {
    Some(ref path) => {
      info!("Using config file: {}", path.display());
      SiteConfig::from_file(path, year).wrap_err_with(|| {
        format!("Failed to load site configuration: {}", path.display())
      })
    },
    None => Ok(SiteConfig::builtin(year)),
  }
}

/// Validate `site` and log a summary. Files were already validated while
/// loading, so only the built-in record is checked here.
fn check_site(site: &SiteConfig, from_file: bool) -> Result<()> {
  if !from_file {
    site.validate()?;
  }

  info!(
    "Configuration is valid: {} links, {} versions",
    site.links.len(),
    site.versions.len()
  );
  match site.active_version() {
    Some(active) => info!("Active version: {}", active.version),
    None => info!("No version is marked active"),
  }

  Ok(())
}

/// Write `site` to `output`, refusing to replace an existing file unless
/// `force` is set.
fn init_site(
  site: &SiteConfig,
  output: &Path,
  format: ConfigFormat,
  force: bool,
) -> Result<()> {
  // Check if file already exists and that we're not forcing overwrite
  if output.exists() && !force {
    bail!(
      "Configuration file already exists: {}. Use --force to overwrite.",
      output.display()
    );
  }

  // Create parent directories if needed
  if let Some(parent) = output.parent()
    && !parent.as_os_str().is_empty()
    && !parent.exists()
  {
    fs::create_dir_all(parent).wrap_err_with(|| {
      format!("Failed to create directory: {}", parent.display())
    })?;
    info!("Created directory: {}", parent.display());
  }

  site.write_file(output, format).wrap_err_with(|| {
    format!("Failed to write configuration file: {}", output.display())
  })
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_check_validates_builtin_record() {
    assert!(check_site(&SiteConfig::builtin(2024), false).is_ok());

    let mut site = SiteConfig::builtin(2024);
    site.versions[1].active = true;
    let err = check_site(&site, false).expect_err("two active versions");
    assert!(err.to_string().contains("only one version may be active"));
  }

  #[test]
  fn test_check_skips_revalidating_loaded_file() {
    // A loaded file has passed validation already; the summary is all that
    // is left to do.
    let mut site = SiteConfig::builtin(2024);
    site.versions[1].active = true;
    assert!(check_site(&site, true).is_ok());
  }

  #[test]
  fn test_init_writes_loadable_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("site.toml");
    let site = SiteConfig::builtin(2024);

    init_site(&site, &output, ConfigFormat::Toml, false)
      .expect("first init should succeed");

    let loaded =
      SiteConfig::from_file(&output, 2024).expect("Failed to load site.toml");
    assert_eq!(loaded, site);
  }

  #[test]
  fn test_init_refuses_overwrite_without_force() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("site.toml");
    fs::write(&output, "# keep me\n").expect("Failed to write site.toml");

    let err = init_site(
      &SiteConfig::builtin(2024),
      &output,
      ConfigFormat::Toml,
      false,
    )
    .expect_err("existing file should not be replaced");
    assert!(err.to_string().contains("already exists"));

    let content = fs::read_to_string(&output).expect("Failed to read file");
    assert_eq!(content, "# keep me\n");
  }

  #[test]
  fn test_init_overwrites_with_force() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("site.json");
    fs::write(&output, "{}").expect("Failed to write site.json");

    let site = SiteConfig::builtin(2024);
    init_site(&site, &output, ConfigFormat::Json, true)
      .expect("forced init should succeed");

    let loaded =
      SiteConfig::from_file(&output, 2024).expect("Failed to load site.json");
    assert_eq!(loaded, site);
  }

  #[test]
  fn test_init_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("dir").join("sub").join("site.toml");

    init_site(
      &SiteConfig::builtin(2024),
      &output,
      ConfigFormat::Toml,
      false,
    )
    .expect("init should create missing directories");
    assert!(output.is_file());
  }
}
