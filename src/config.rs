//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Default location of the dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/divisions.json";

/// Browse Korean administrative divisions from a static dataset.
///
/// Reads commands from stdin, one per line, and writes responses to stdout.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the divisions JSON file (either dataset version)
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Seed for `random` selections; 0 draws from entropy
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Validate the dataset, print a summary, and exit
    #[arg(long)]
    pub validate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            seed: 0,
            validate: false,
        }
    }
}
