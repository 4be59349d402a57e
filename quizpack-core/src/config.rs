//! Configuration types for question pack processing

use crate::error::{CoreError, Result};
use crate::markers::MarkerSet;
use serde::{Deserialize, Serialize};

/// Default maximum length of one outbound message, in characters
pub const DEFAULT_MAX_CHUNK_LENGTH: usize = 4000;

/// Default maximum length of a selectable block, in characters
pub const DEFAULT_MAX_BLOCK_LENGTH: usize = 10_000;

macro_rules! embed_marker_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const EMBEDDED_PRESETS: [(&str, &str); 2] = [
    embed_marker_config!("ru", "../configs/markers/russian.toml"),
    embed_marker_config!("en", "../configs/markers/english.toml"),
];

/// Marker sets used to find structure in a corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Lines that close a block (author lines)
    pub block_end: MarkerSet,
    /// Lines that start the visible question
    pub question_start: MarkerSet,
    /// Lines that start the hidden answer
    pub answer_start: MarkerSet,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            block_end: MarkerSet::new(["Автор:", "Авторка:"]),
            question_start: MarkerSet::new(["Вопрос"]),
            answer_start: MarkerSet::new(["Ответ:"]),
        }
    }
}

/// Size limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum characters per chunk
    pub max_chunk_length: usize,
    /// Maximum characters in a selected block
    pub max_block_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_chunk_length: DEFAULT_MAX_CHUNK_LENGTH,
            max_block_length: DEFAULT_MAX_BLOCK_LENGTH,
        }
    }
}

/// Optional description of a marker preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetMetadata {
    /// Short code, e.g. "ru"
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// Complete core configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Preset description, if the config came from one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PresetMetadata>,
    /// Marker sets
    #[serde(default)]
    pub markers: MarkerConfig,
    /// Size limits
    #[serde(default)]
    pub limits: Limits,
}

impl CoreConfig {
    /// Load one of the embedded presets by code
    pub fn preset(code: &str) -> Result<Self> {
        let (_, content) = EMBEDDED_PRESETS
            .iter()
            .find(|(preset, _)| *preset == code)
            .ok_or_else(|| CoreError::Config(format!("unknown marker preset '{code}'")))?;

        let config = Self::from_toml_str(content)?;
        match &config.metadata {
            Some(meta) if meta.code == code => Ok(config),
            other => Err(CoreError::Config(format!(
                "preset code mismatch: expected {code}, got {:?}",
                other.as_ref().map(|m| m.code.as_str())
            ))),
        }
    }

    /// Codes of the embedded presets
    pub fn available_presets() -> Vec<&'static str> {
        EMBEDDED_PRESETS.iter().map(|(code, _)| *code).collect()
    }

    /// Parse a configuration from TOML text
    ///
    /// Missing sections and keys fall back to defaults; unknown sections are
    /// ignored so the same file can carry settings for other tools.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check limits and marker sets
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_chunk_length == 0 {
            return Err(CoreError::InvalidLimit {
                name: "max_chunk_length",
                value: 0,
            });
        }
        if self.limits.max_block_length == 0 {
            return Err(CoreError::InvalidLimit {
                name: "max_block_length",
                value: 0,
            });
        }
        if self.markers.block_end.is_empty() {
            return Err(CoreError::Config(
                "at least one block_end marker is required".to_string(),
            ));
        }
        Ok(())
    }
}
