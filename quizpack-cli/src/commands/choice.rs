//! Choice command implementation

use super::make_rng;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use quizpack_core::{choice, parse_names};

/// Arguments for the choice command
#[derive(Debug, Args)]
pub struct ChoiceArgs {
    /// Names separated by commas, e.g. "John, Bob, Juan"
    #[arg(value_name = "NAMES", required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Seed for reproducible selection
    #[arg(short, long, value_name = "N")]
    pub seed: Option<u64>,
}

/// Result of a pick
#[derive(Debug, PartialEq, Eq)]
pub struct Pick {
    /// Names that took part
    pub names: Vec<String>,
    /// The chosen name
    pub chosen: String,
}

impl ChoiceArgs {
    /// Execute the choice command
    pub fn execute(&self) -> Result<()> {
        let pick = self.pick()?;
        println!("From: {}", pick.names.join(", "));
        println!("Chosen: {}", pick.chosen);
        Ok(())
    }

    /// Parse the arguments and pick a name
    pub fn pick(&self) -> Result<Pick> {
        // Shell words are glued back so "John, Bob" and "John," "Bob" agree
        let names = parse_names(&self.names.join(" "));
        let chosen = choice(&names, &mut make_rng(self.seed)).map_err(CliError::from)?;
        Ok(Pick { names, chosen })
    }
}
