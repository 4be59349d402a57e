//! Plain text output formatter

use super::{MessageKind, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - messages separated by blank lines, spoiler
/// messages after a separator line
pub struct TextFormatter<W: Write> {
    writer: W,
    message_count: usize,
    in_spoiler: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            message_count: 0,
            in_spoiler: false,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_message(&mut self, text: &str, kind: MessageKind) -> Result<()> {
        if self.message_count > 0 {
            writeln!(self.writer)?;
        }
        if kind == MessageKind::Spoiler && !self.in_spoiler {
            writeln!(self.writer, "--- spoiler ---")?;
            self.in_spoiler = true;
        }
        writeln!(self.writer, "{text}")?;
        self.message_count += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter
                .format_message("Вопрос 1", MessageKind::Question)
                .unwrap();
            formatter
                .format_message("more", MessageKind::Question)
                .unwrap();
            formatter
                .format_message("Ответ: да", MessageKind::Spoiler)
                .unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "Вопрос 1\n\nmore\n\n--- spoiler ---\nОтвет: да\n");
    }

    #[test]
    fn test_question_only() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_message("q", MessageKind::Question).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "q\n");
    }

    #[test]
    fn test_spoiler_only() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter
                .format_message("Ответ: сразу", MessageKind::Spoiler)
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "--- spoiler ---\nОтвет: сразу\n"
        );
    }
}
