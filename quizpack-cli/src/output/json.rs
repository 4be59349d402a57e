//! JSON output formatter

use super::{MessageKind, OutputFormatter};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects messages and writes one document on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    document: QuestionDocument,
}

/// Data structure for JSON output
#[derive(Debug, Default, Serialize)]
pub struct QuestionDocument {
    /// Position of the block in the corpus
    pub block_index: usize,
    /// Messages in sending order
    pub messages: Vec<MessageData>,
}

/// One outbound message
#[derive(Debug, Serialize)]
pub struct MessageData {
    /// Question or spoiler
    pub kind: MessageKind,
    /// Message text
    pub text: String,
    /// Length in characters
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document: QuestionDocument::default(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn start(&mut self, block_index: usize) -> Result<()> {
        self.document.block_index = block_index;
        Ok(())
    }

    fn format_message(&mut self, text: &str, kind: MessageKind) -> Result<()> {
        self.document.messages.push(MessageData {
            kind,
            text: text.to_string(),
            length: text.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
