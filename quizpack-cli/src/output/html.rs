//! Telegram HTML output formatter

use super::escape::escape_html;
use super::{MessageKind, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// HTML formatter - escapes each message and wraps spoiler messages in a
/// `tg-spoiler` span; messages are separated by blank lines
pub struct HtmlFormatter<W: Write> {
    writer: W,
    message_count: usize,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            message_count: 0,
        }
    }
}

/// Render one message body for HTML parse mode
pub fn html_message(text: &str, kind: MessageKind) -> String {
    match kind {
        MessageKind::Question => escape_html(text),
        MessageKind::Spoiler => {
            format!("<span class=\"tg-spoiler\">{}</span>", escape_html(text))
        }
    }
}

impl<W: Write> OutputFormatter for HtmlFormatter<W> {
    fn format_message(&mut self, text: &str, kind: MessageKind) -> Result<()> {
        if self.message_count > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "{}", html_message(text, kind))?;
        self.message_count += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
