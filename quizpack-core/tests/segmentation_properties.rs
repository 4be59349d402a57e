//! Property tests for block parsing and chunk segmentation

use proptest::prelude::*;
use quizpack_core::{parse_blocks, segment, CoreError, MarkerSet};

fn text_strategy() -> impl Strategy<Value = String> {
    // Mix of short and long lines, spaces and Cyrillic to exercise
    // multi-byte slicing
    prop::collection::vec("[a-zА-Я ]{0,60}", 0..40).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn chunks_never_exceed_limit(text in text_strategy(), max in 1usize..80) {
        let chunks = segment(&text, max).unwrap();
        for chunk in &chunks {
            prop_assert!(chunk.chars().count() <= max);
        }
    }

    #[test]
    fn multi_chunk_output_has_no_empty_chunks(text in text_strategy(), max in 1usize..80) {
        prop_assume!(text.chars().count() > max);
        let chunks = segment(&text, max).unwrap();
        for chunk in &chunks {
            prop_assert!(!chunk.trim().is_empty());
        }
    }

    #[test]
    fn chunks_preserve_source_order(text in text_strategy(), max in 1usize..80) {
        let chunks = segment(&text, max).unwrap();
        let squashed: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let rejoined: String = chunks
            .concat()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        prop_assert_eq!(squashed, rejoined);
    }

    #[test]
    fn oversized_line_gives_ceil_pieces(len in 2usize..300, max in 1usize..50) {
        prop_assume!(len > max);
        let line = "ы".repeat(len);
        let chunks = segment(&line, max).unwrap();
        prop_assert_eq!(chunks.len(), len.div_ceil(max));
    }

    #[test]
    fn block_count_follows_markers(
        bodies in prop::collection::vec("[a-z]{1,10}", 1..10),
        trailing in prop::option::of("[a-z]{1,10}"),
    ) {
        let mut corpus = String::new();
        for body in &bodies {
            corpus.push_str(body);
            corpus.push_str("\nАвтор: x\n");
        }
        if let Some(tail) = &trailing {
            corpus.push_str(tail);
        }

        let blocks = parse_blocks(&corpus, &MarkerSet::new(["Автор:"])).unwrap();
        let expected = bodies.len() + usize::from(trailing.is_some());
        prop_assert_eq!(blocks.len(), expected);
    }

    #[test]
    fn whitespace_corpus_is_empty(corpus in "[ \t\r\n]{0,40}") {
        let result = parse_blocks(&corpus, &MarkerSet::new(["Автор:"]));
        prop_assert!(matches!(result, Err(CoreError::EmptyCorpus)));
    }
}
