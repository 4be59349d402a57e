//! Message-sized text segmentation
//!
//! Lengths are counted in characters, and slicing always happens on
//! character boundaries.

use crate::error::{CoreError, Result};

/// Splits text into chunks of at most `max_length` characters
///
/// Whole lines are packed greedily. Only a line that alone exceeds the limit
/// is cut mid-content, into consecutive fixed-size pieces.
#[derive(Debug, Clone, Copy)]
pub struct ChunkSegmenter {
    max_length: usize,
}

impl ChunkSegmenter {
    /// Create a segmenter; `max_length` must be positive
    pub fn new(max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(CoreError::InvalidLimit {
                name: "max_chunk_length",
                value: max_length,
            });
        }
        Ok(Self { max_length })
    }

    /// Configured maximum chunk length
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Segment text into ordered chunks
    ///
    /// Text that already fits is returned as a single chunk exactly as given,
    /// without trimming; an empty string yields `[""]`. On the multi-chunk
    /// path every chunk is trimmed and empty chunks are dropped.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let max = self.max_length;
        if text.chars().count() <= max {
            return vec![text.to_string()];
        }

        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for line in text.split_inclusive('\n') {
            let line_len = line.chars().count();

            if line_len > max {
                if !current.is_empty() {
                    chunks.push(current.trim().to_string());
                    current.clear();
                    current_len = 0;
                }
                for piece in split_by_chars(line, max) {
                    chunks.push(piece.trim().to_string());
                }
                continue;
            }

            if current_len + line_len > max {
                chunks.push(current.trim().to_string());
                current.clear();
                current.push_str(line);
                current_len = line_len;
            } else {
                current.push_str(line);
                current_len += line_len;
            }
        }

        if !current.is_empty() {
            chunks.push(current.trim().to_string());
        }

        chunks.retain(|chunk| !chunk.is_empty());
        log::debug!(
            "segmented {} characters into {} chunks",
            text.chars().count(),
            chunks.len()
        );
        chunks
    }
}

/// Segment text with the given limit
pub fn segment(text: &str, max_length: usize) -> Result<Vec<String>> {
    Ok(ChunkSegmenter::new(max_length)?.segment(text))
}

/// Cut a string into consecutive pieces of at most `size` characters
fn split_by_chars(text: &str, size: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (offset, _) in text.char_indices() {
        if count == size {
            pieces.push(&text[start..offset]);
            start = offset;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_path_returns_text_unchanged() {
        let chunks = segment("  short text\n", 4000).unwrap();
        assert_eq!(chunks, vec!["  short text\n".to_string()]);
    }

    #[test]
    fn test_fast_path_empty_text() {
        assert_eq!(segment("", 10).unwrap(), vec![String::new()]);
    }

    #[test]
    fn test_three_long_lines() {
        let line = "a".repeat(1500);
        let text = format!("{line}\n{line}\n{line}");

        let chunks = segment(&text, 4000).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], format!("{line}\n{line}"));
        assert_eq!(chunks[0].chars().count(), 3001);
        assert_eq!(chunks[1], line);
    }

    #[test]
    fn test_oversized_line_cut_into_pieces() {
        let text = "x".repeat(25);
        // 25 chars, limit 10 -> 10 + 10 + 5
        let chunks = segment(&text, 10).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 10);
        assert_eq!(chunks[1].len(), 10);
        assert_eq!(chunks[2].len(), 5);
    }

    #[test]
    fn test_buffer_flushed_before_oversized_line() {
        let text = format!("head\n{}\ntail", "y".repeat(12));
        let chunks = segment(&text, 10).unwrap();
        assert_eq!(
            chunks,
            vec!["head", "yyyyyyyyyy", "yy", "tail"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_multibyte_pieces_respect_char_limit() {
        let text = "Ж".repeat(7);
        let chunks = segment(&text, 3).unwrap();
        assert_eq!(chunks, vec!["ЖЖЖ", "ЖЖЖ", "Ж"]);
    }

    #[test]
    fn test_whitespace_only_chunks_dropped() {
        let text = format!("{}\n{}\nend", "z".repeat(8), " ".repeat(9));
        let chunks = segment(&text, 10).unwrap();
        assert_eq!(chunks, vec!["zzzzzzzz", "end"]);
    }

    #[test]
    fn test_line_break_counts_toward_length() {
        // "abcd\n" is 5 chars, two of them fill a limit of 10 exactly
        let text = "abcd\nabcd\nabcd\n";
        let chunks = segment(text, 10).unwrap();
        assert_eq!(chunks, vec!["abcd\nabcd", "abcd"]);
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(matches!(
            segment("text", 0),
            Err(CoreError::InvalidLimit { value: 0, .. })
        ));
    }

    #[test]
    fn test_split_by_chars() {
        assert_eq!(split_by_chars("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(split_by_chars("abc", 3), vec!["abc"]);
        assert!(split_by_chars("", 3).is_empty());
    }
}
