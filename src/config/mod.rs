//! Configuration management

use clap::Parser;
use std::path::PathBuf;

/// Command-line interface for shelve
#[derive(Debug, Parser)]
#[command(
    name = "shelve",
    version,
    about = "Sort a directory tree into extension-named folders"
)]
pub struct Cli {
    /// Directory tree to scan for files
    pub source: PathBuf,

    /// Directory receiving the extension buckets (created if missing)
    #[arg(default_value = "dist")]
    pub destination: PathBuf,
}

/// Global configuration for one organize run
///
/// The destination default lives on the CLI flag, not in a hidden constant,
/// so library callers always pass an explicit destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source directory
    pub source: PathBuf,

    /// Destination directory
    pub destination: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            source: cli.source,
            destination: cli.destination,
        }
    }
}
