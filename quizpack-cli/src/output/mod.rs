//! Output formatting module
//!
//! Each chunk becomes one outbound message. Formatters decide how a message
//! is written and how spoiler messages are hidden.

use anyhow::Result;
use quizpack_core::QuestionOutput;

/// Which part of the question a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Visible question text
    Question,
    /// Hidden answer text
    Spoiler,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Called once before the first message
    fn start(&mut self, _block_index: usize) -> Result<()> {
        Ok(())
    }

    /// Format and output a single message
    fn format_message(&mut self, text: &str, kind: MessageKind) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

/// Send question chunks, then spoiler chunks, through a formatter
pub fn render_question(
    formatter: &mut dyn OutputFormatter,
    output: &QuestionOutput,
) -> Result<()> {
    formatter.start(output.block_index)?;
    for chunk in &output.question {
        formatter.format_message(chunk, MessageKind::Question)?;
    }
    for chunk in &output.spoiler {
        formatter.format_message(chunk, MessageKind::Spoiler)?;
    }
    formatter.finish()
}

pub mod escape;
pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
