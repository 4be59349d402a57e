//! Question service and builder
//!
//! One [`QuestionService`] is built at startup and shared by reference. Each
//! request runs parse, select, split and segment over the caller's corpus and
//! keeps nothing afterwards.

use crate::{
    chunker::ChunkSegmenter,
    config::{CoreConfig, Limits, MarkerConfig},
    error::{CoreError, Result},
    markers::MarkerSet,
    parser::{parse_blocks, Block},
    selector::{check_block_length, select_block},
    splitter::{split_question, SplitQuestion},
};
use rand::Rng;
use serde::Serialize;

/// Chunks ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOutput {
    /// Position of the source block in the corpus
    pub block_index: usize,
    /// Question chunks, in order; empty when the block opens with the answer
    pub question: Vec<String>,
    /// Spoiler chunks, in order; empty when the block had no answer
    pub spoiler: Vec<String>,
}

impl QuestionOutput {
    /// True when there are spoiler chunks to send
    pub fn has_spoiler(&self) -> bool {
        !self.spoiler.is_empty()
    }
}

/// Entry point for drawing questions from a corpus
#[derive(Debug, Clone)]
pub struct QuestionService {
    config: CoreConfig,
    segmenter: ChunkSegmenter,
}

impl QuestionService {
    /// Create a service with the default (Russian) markers and limits
    pub fn new() -> Result<Self> {
        Self::with_config(CoreConfig::default())
    }

    /// Create a service from an embedded marker preset
    pub fn with_preset(code: &str) -> Result<Self> {
        Self::with_config(CoreConfig::preset(code)?)
    }

    /// Create a service with custom configuration
    pub fn with_config(config: CoreConfig) -> Result<Self> {
        config.validate()?;
        let segmenter = ChunkSegmenter::new(config.limits.max_chunk_length)?;
        Ok(Self { config, segmenter })
    }

    /// Start a builder
    pub fn builder() -> QuestionServiceBuilder {
        QuestionServiceBuilder::new()
    }

    /// Current configuration
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Parse the corpus into blocks
    pub fn blocks(&self, corpus: &str) -> Result<Vec<Block>> {
        parse_blocks(corpus, &self.config.markers.block_end)
    }

    /// Split a block's text into question and spoiler
    pub fn split(&self, block: &str) -> SplitQuestion {
        split_question(
            block,
            &self.config.markers.question_start,
            &self.config.markers.answer_start,
        )
    }

    /// Segment text with the configured chunk limit
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.segmenter.segment(text)
    }

    /// Draw a random question from the corpus
    pub fn random_question<R>(&self, corpus: &str, rng: &mut R) -> Result<QuestionOutput>
    where
        R: Rng + ?Sized,
    {
        let blocks = self.blocks(corpus)?;
        let block = select_block(&blocks, self.config.limits.max_block_length, rng)?;
        Ok(self.render_block(block))
    }

    /// Build the output for a specific block of the corpus
    pub fn question_at(&self, corpus: &str, index: usize) -> Result<QuestionOutput> {
        let blocks = self.blocks(corpus)?;
        let block = blocks.get(index).ok_or(CoreError::BlockNotFound {
            index,
            count: blocks.len(),
        })?;
        self.question_from_block(block)
    }

    /// Split and segment an already selected block
    pub fn question_from_block(&self, block: &Block) -> Result<QuestionOutput> {
        check_block_length(block, self.config.limits.max_block_length)?;
        Ok(self.render_block(block))
    }

    // Empty parts produce no messages at all, never an empty chunk
    fn render_block(&self, block: &Block) -> QuestionOutput {
        let split = self.split(&block.text);

        QuestionOutput {
            block_index: block.index,
            question: self.segment_part(&split.question_text),
            spoiler: self.segment_part(&split.spoiler_text),
        }
    }

    fn segment_part(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            Vec::new()
        } else {
            self.segment(text)
        }
    }
}

/// Builder for QuestionService
///
/// Provides a fluent interface for configuring the service.
#[derive(Debug, Default)]
pub struct QuestionServiceBuilder {
    config: CoreConfig,
}

impl QuestionServiceBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: CoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace all marker sets
    pub fn markers(mut self, markers: MarkerConfig) -> Self {
        self.config.markers = markers;
        self
    }

    /// Set the block-closing markers
    pub fn block_markers<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.markers.block_end = MarkerSet::new(prefixes);
        self
    }

    /// Set the question-start markers
    pub fn question_markers<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.markers.question_start = MarkerSet::new(prefixes);
        self
    }

    /// Set the answer-start markers
    pub fn answer_markers<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.markers.answer_start = MarkerSet::new(prefixes);
        self
    }

    /// Replace both limits
    pub fn limits(mut self, limits: Limits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Set the maximum chunk length
    pub fn max_chunk_length(mut self, length: usize) -> Self {
        self.config.limits.max_chunk_length = length;
        self
    }

    /// Set the maximum block length
    pub fn max_block_length(mut self, length: usize) -> Self {
        self.config.limits.max_block_length = length;
        self
    }

    /// Build the service
    pub fn build(self) -> Result<QuestionService> {
        QuestionService::with_config(self.config)
    }
}
