//! Poll listing and rendering
//!
//! Polls are only described here; sending them is left to whatever bot
//! reads the same configuration file.

use crate::config::{CliConfig, PollConfig, PollKind};
use crate::output::escape::{escape_markdown, escape_markdown_v2};
use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// Poll subcommands
#[derive(Debug, Subcommand)]
pub enum PollCommands {
    /// List configured polls
    List {
        /// Configuration file
        #[arg(short, long, value_name = "FILE", env = "QUIZPACK_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Show one poll by number
    Show {
        /// Poll number
        number: u32,

        /// Configuration file
        #[arg(short, long, value_name = "FILE", env = "QUIZPACK_CONFIG")]
        config: Option<PathBuf>,

        /// Escape question and options for a messenger parse mode
        #[arg(short, long, value_enum, default_value = "none")]
        escape: EscapeMode,
    },
}

/// Escaping applied to poll text
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EscapeMode {
    /// Text as configured
    None,
    /// Legacy Markdown
    Markdown,
    /// MarkdownV2
    MarkdownV2,
}

impl EscapeMode {
    /// Apply the escaping to a piece of text
    pub fn apply(&self, text: &str) -> String {
        match self {
            EscapeMode::None => text.to_string(),
            EscapeMode::Markdown => escape_markdown(text),
            EscapeMode::MarkdownV2 => escape_markdown_v2(text),
        }
    }
}

impl PollCommands {
    /// Execute the poll subcommand
    pub fn execute(&self) -> Result<()> {
        match self {
            PollCommands::List { config } => {
                let config = CliConfig::load(config.as_deref())?;
                print!("{}", list_polls(&config.polls));
                Ok(())
            }
            PollCommands::Show {
                number,
                config,
                escape,
            } => {
                let config = CliConfig::load(config.as_deref())?;
                let poll = config.poll(*number)?;
                print!("{}", show_poll(poll, *escape));
                Ok(())
            }
        }
    }
}

/// Render the poll listing
pub fn list_polls(polls: &[PollConfig]) -> String {
    if polls.is_empty() {
        return "No polls available in configuration.\n".to_string();
    }

    let mut out = String::from("Available Polls:\n\n");
    for poll in polls {
        out.push_str(&format!("Number: {}\n", poll.number));
        out.push_str(&format!("ID: {}\n", poll.id));
        out.push_str(&format!("Question: {}\n", poll.question));
        out.push_str(&format!("Type: {}\n", poll.kind.label()));
        out.push_str(&format!("Options: {}\n\n", poll.options.len()));
    }
    out.push_str("Usage: quizpack polls show <NUMBER>\n");
    out
}

/// Render one poll with its settings and options
pub fn show_poll(poll: &PollConfig, escape: EscapeMode) -> String {
    let anonymous = if poll.is_anonymous {
        "Anonymous"
    } else {
        "Not Anonymous"
    };
    let multiple = if poll.allows_multiple_answers {
        "Multiple answers allowed"
    } else {
        "Single answer only"
    };

    let mut out = format!(
        "Poll #{} ({}, {}, {})\n",
        poll.number,
        poll.kind.label(),
        anonymous,
        multiple
    );
    out.push_str(&format!("Question: {}\n", escape.apply(&poll.question)));

    for (i, option) in poll.options.iter().enumerate() {
        let correct = poll.kind == PollKind::Quiz && poll.correct_option_id == Some(i);
        let marker = if correct { " [correct]" } else { "" };
        out.push_str(&format!("  {}. {}{}\n", i + 1, escape.apply(option), marker));
    }

    if poll.kind == PollKind::Quiz {
        if let Some(explanation) = &poll.explanation {
            out.push_str(&format!("Explanation: {}\n", escape.apply(explanation)));
        }
    }
    out
}
