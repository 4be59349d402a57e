//! Corpus to block parsing
//!
//! A corpus is a sequence of question blocks, each closed by a marker line
//! (usually the author credit). Text after the last marker forms a trailing
//! block of its own.

use crate::error::{CoreError, Result};
use crate::markers::MarkerSet;
use serde::Serialize;

/// One question block from the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Position in the corpus, starting at 0
    pub index: usize,
    /// Block text with surrounding whitespace trimmed
    pub text: String,
}

impl Block {
    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// First non-blank line, for listings
    pub fn first_line(&self) -> &str {
        self.text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}

/// Split a corpus into blocks closed by marker lines
///
/// Each block includes its closing marker line. Blocks that are empty after
/// trimming are skipped.
pub fn parse_blocks(corpus: &str, markers: &MarkerSet) -> Result<Vec<Block>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in split_lines(corpus) {
        current.push(line);
        if markers.matches(line) {
            push_block(&mut blocks, &current);
            current.clear();
        }
    }
    push_block(&mut blocks, &current);

    if blocks.is_empty() {
        return Err(CoreError::EmptyCorpus);
    }

    log::debug!("parsed {} blocks from corpus", blocks.len());
    Ok(blocks)
}

/// Split text into lines on every line separator
///
/// Besides `\n` and `\r\n` this breaks on a lone `\r`, vertical tab, form
/// feed, the information separators `\x1c`..`\x1e`, NEL, U+2028 and U+2029.
/// A trailing separator does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..offset]);
        start = offset + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

fn push_block(blocks: &mut Vec<Block>, lines: &[&str]) {
    let text = lines.join("\n");
    let text = text.trim();
    if !text.is_empty() {
        blocks.push(Block {
            index: blocks.len(),
            text: text.to_string(),
        });
    }
}
