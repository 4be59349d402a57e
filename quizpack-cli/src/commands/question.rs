//! Question command implementation

use super::make_rng;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{
    render_question, HtmlFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter,
    TextFormatter,
};
use anyhow::Result;
use clap::Args;
use quizpack_core::{QuestionOutput, QuestionService};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the question command
#[derive(Debug, Args)]
pub struct QuestionArgs {
    /// Question pack file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "QUIZPACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Seed for reproducible selection
    #[arg(short, long, value_name = "N")]
    pub seed: Option<u64>,

    /// Render this block instead of a random one
    #[arg(short, long, value_name = "INDEX", conflicts_with = "seed")]
    pub block: Option<usize>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, spoiler after a separator
    Text,
    /// JSON document with every message
    Json,
    /// Telegram HTML with tg-spoiler spans
    Html,
    /// Telegram MarkdownV2 with || spoilers
    Markdown,
}

impl OutputFormat {
    /// Build a formatter writing to `writer`
    pub fn formatter<'a, W: Write + 'a>(&self, writer: W) -> Box<dyn OutputFormatter + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl QuestionArgs {
    /// Execute the question command
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let output = self.draw()?;
        let stdout = io::stdout();
        let mut formatter = self.format.formatter(stdout.lock());
        render_question(formatter.as_mut(), &output)
    }

    /// Load the pack and produce the chunks to send
    pub fn draw(&self) -> Result<QuestionOutput> {
        let config = CliConfig::load(self.config.as_deref())?;
        let service = QuestionService::with_config(config.core.clone()).map_err(CliError::from)?;
        let corpus = FileReader::read_text(&self.input)?;

        let output = match self.block {
            Some(index) => service.question_at(&corpus, index),
            None => service.random_question(&corpus, &mut make_rng(self.seed)),
        };

        output.map_err(|e| {
            log::warn!("failed to draw a question from {}: {e}", self.input.display());
            CliError::from(e).into()
        })
    }
}
