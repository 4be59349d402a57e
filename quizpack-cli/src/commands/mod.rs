//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod blocks;
pub mod choice;
pub mod generate_config;
pub mod polls;
pub mod question;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Draw a random question from a question pack
    Question(question::QuestionArgs),

    /// Pick one name at random from a comma-separated list
    Choice(choice::ChoiceArgs),

    /// List the blocks found in a question pack
    Blocks(blocks::BlocksArgs),

    /// Show predefined polls
    Polls {
        #[command(subcommand)]
        subcommand: polls::PollCommands,
    },

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Question(args) => args.execute(),
            Commands::Choice(args) => args.execute(),
            Commands::Blocks(args) => args.execute(),
            Commands::Polls { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Random source for a command: seeded when reproducible output is wanted
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::debug!("using seeded rng ({seed})");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
