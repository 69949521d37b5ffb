use std::path::PathBuf;

use clap::{Parser, Subcommand};
use www_config::ConfigFormat;

/// Command line interface for www
#[derive(Parser, Debug)]
#[command(author, version, about = "Next.js for Drupal site configuration")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to a site configuration file (TOML or JSON). The built-in
  /// configuration is used when omitted.
  #[arg(short = 'c', long = "config-file", global = true)]
  pub config_file: Option<PathBuf>,

  /// Year to use for the copyright line instead of the system clock
  #[arg(long, global = true)]
  pub year: Option<i16>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print the site configuration.
  Show {
    /// Output format (json or toml)
    #[arg(short = 'F', long, default_value = "json")]
    format: ConfigFormat,
  },

  /// Validate the site configuration.
  Check,

  /// Write the site configuration to a file.
  Init {
    /// Path where the configuration file will be written
    #[arg(short, long, default_value = "site.toml")]
    output: PathBuf,

    /// Format of the configuration file (toml or json)
    #[arg(short = 'F', long, default_value = "toml")]
    format: ConfigFormat,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
