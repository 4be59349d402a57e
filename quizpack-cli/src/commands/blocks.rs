//! Blocks command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use quizpack_core::{Block, QuestionService};
use std::path::PathBuf;

/// Arguments for the blocks command
#[derive(Debug, Args)]
pub struct BlocksArgs {
    /// Question pack file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "QUIZPACK_CONFIG")]
    pub config: Option<PathBuf>,
}

impl BlocksArgs {
    /// Execute the blocks command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let service = QuestionService::with_config(config.core.clone()).map_err(CliError::from)?;
        let corpus = FileReader::read_text(&self.input)?;
        let blocks = service.blocks(&corpus).map_err(CliError::from)?;

        let max = config.core.limits.max_block_length;
        println!("Blocks: {}", blocks.len());
        for block in &blocks {
            println!("{}", describe_block(block, max));
        }

        let oversized = blocks.iter().filter(|b| b.char_len() > max).count();
        if oversized > 0 {
            println!("{oversized} block(s) exceed the {max} character limit");
        }
        Ok(())
    }
}

/// One listing line: index, length, first line
pub fn describe_block(block: &Block, max_length: usize) -> String {
    let length = block.char_len();
    let flag = if length > max_length { " [too long]" } else { "" };
    format!(
        "#{:<4} {:>6} chars{}  {}",
        block.index,
        length,
        flag,
        truncate(block.first_line(), 60)
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        text.chars().take(max_chars).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
