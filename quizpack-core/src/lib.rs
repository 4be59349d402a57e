//! Question pack parsing and message segmentation
//!
//! This crate turns a loosely structured question pack into one randomly
//! chosen question, split into a visible part and a spoiler, each cut into
//! chunks that fit a message length limit.
//!
//! It never reads the corpus itself: callers pass text in and get ordered
//! lists of strings back.
//!
//! ```
//! use quizpack_core::QuestionService;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let corpus = "Вопрос 1: Что?\nОтвет: Это\nАвтор: А\n";
//! let service = QuestionService::new().unwrap();
//! let output = service
//!     .random_question(corpus, &mut StdRng::seed_from_u64(1))
//!     .unwrap();
//!
//! assert_eq!(output.question, vec!["Вопрос 1: Что?"]);
//! assert_eq!(output.spoiler, vec!["Ответ: Это\nАвтор: А"]);
//! ```

#![warn(missing_docs)]

pub mod choice;
pub mod chunker;
pub mod config;
pub mod error;
pub mod markers;
pub mod parser;
pub mod processor;
pub mod selector;
pub mod splitter;

// Re-export key types
pub use choice::{choice, parse_names};
pub use chunker::{segment, ChunkSegmenter};
pub use config::{CoreConfig, Limits, MarkerConfig};
pub use error::{CoreError, Result};
pub use markers::MarkerSet;
pub use parser::{parse_blocks, split_lines, Block};
pub use processor::{QuestionOutput, QuestionService, QuestionServiceBuilder};
pub use selector::select_block;
pub use splitter::{split_question, SplitQuestion};
