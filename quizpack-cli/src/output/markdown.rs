//! Telegram MarkdownV2 output formatter

use super::escape::escape_markdown_v2;
use super::{MessageKind, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - MarkdownV2-escaped messages, spoilers wrapped in `||`
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    message_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            message_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_message(&mut self, text: &str, kind: MessageKind) -> Result<()> {
        if self.message_count > 0 {
            writeln!(self.writer)?;
        }
        let body = escape_markdown_v2(text);
        match kind {
            MessageKind::Question => writeln!(self.writer, "{body}")?,
            MessageKind::Spoiler => writeln!(self.writer, "||{body}||")?,
        }
        self.message_count += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
