//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::load(Some(&self.config)) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("{}", summary(&config));
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}

/// Short description of a loaded configuration
pub fn summary(config: &CliConfig) -> String {
    format!(
        "  Block markers: {}\n  Question markers: {}\n  Answer markers: {}\n  \
         Max chunk length: {}\n  Max block length: {}\n  Polls: {}",
        config.core.markers.block_end.prefixes().join(", "),
        config.core.markers.question_start.prefixes().join(", "),
        config.core.markers.answer_start.prefixes().join(", "),
        config.core.limits.max_chunk_length,
        config.core.limits.max_block_length,
        config.polls.len()
    )
}
