//! Configuration management

use crate::types::EdgeDiffError;
use clap::Parser;
use std::path::PathBuf;

/// Command-line interface for edgediff
#[derive(Debug, Parser)]
#[command(
    name = "edgediff",
    version,
    about = "Check a weighted edge-list file against a reference edge list"
)]
pub struct Cli {
    /// Edge-list file to check
    pub checked: PathBuf,

    /// Reference edge-list file to match against
    pub reference: PathBuf,

    /// Print a match summary to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Global configuration for edgediff
#[derive(Debug, Clone)]
pub struct Config {
    /// File whose lines are checked for membership
    pub checked: PathBuf,

    /// File whose lines form the containment set
    pub reference: PathBuf,

    /// Emit a match summary on stderr
    pub verbose: bool,
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), EdgeDiffError> {
        // Ensure both inputs exist
        if !self.checked.is_file() {
            return Err(EdgeDiffError::Config(format!(
                "Checked file does not exist: {:?}",
                self.checked
            )));
        }

        if !self.reference.is_file() {
            return Err(EdgeDiffError::Config(format!(
                "Reference file does not exist: {:?}",
                self.reference
            )));
        }

        Ok(())
    }
}

impl TryFrom<Cli> for Config {
    type Error = EdgeDiffError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = Config {
            checked: cli.checked,
            reference: cli.reference,
            verbose: cli.verbose,
        };
        config.validate()?;
        Ok(config)
    }
}
