//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use quizpack_core::CoreConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// CLI configuration structure
///
/// The `[markers]` and `[limits]` tables belong to the core configuration;
/// the `[[polls]]` array is only used by the `polls` commands.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Marker sets and size limits
    #[serde(flatten)]
    pub core: CoreConfig,

    /// Predefined polls
    #[serde(default)]
    pub polls: Vec<PollConfig>,
}

/// Poll flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PollKind {
    /// Plain multiple-choice poll
    #[default]
    Regular,
    /// Poll with one correct answer
    Quiz,
}

impl PollKind {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PollKind::Regular => "Regular",
            PollKind::Quiz => "Quiz",
        }
    }
}

/// One predefined poll
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollConfig {
    /// Number used to pick the poll from the command line
    pub number: u32,

    /// Stable identifier
    pub id: String,

    /// Poll question
    pub question: String,

    /// Answer options
    #[serde(default)]
    pub options: Vec<String>,

    /// Regular poll or quiz
    #[serde(default, rename = "type")]
    pub kind: PollKind,

    /// Hide voter identities
    #[serde(default = "default_true")]
    pub is_anonymous: bool,

    /// Allow picking several options
    #[serde(default)]
    pub allows_multiple_answers: bool,

    /// Zero-based index of the correct option (quiz only)
    #[serde(default)]
    pub correct_option_id: Option<usize>,

    /// Shown after answering (quiz only)
    #[serde(default)]
    pub explanation: Option<String>,
}

fn default_true() -> bool {
    true
}

impl CliConfig {
    /// Load configuration from a file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        log::debug!(
            "loaded config from {} ({} polls)",
            path.display(),
            config.polls.len()
        );
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check core settings and poll definitions
    pub fn validate(&self) -> Result<()> {
        self.core
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let mut numbers = HashSet::new();
        for poll in &self.polls {
            if !numbers.insert(poll.number) {
                return Err(CliError::ConfigError(format!(
                    "duplicate poll number {}",
                    poll.number
                ))
                .into());
            }
            poll.validate()?;
        }
        Ok(())
    }

    /// Find a poll by number
    pub fn poll(&self, number: u32) -> Result<&PollConfig> {
        self.polls
            .iter()
            .find(|poll| poll.number == number)
            .ok_or_else(|| {
                let available: Vec<String> =
                    self.polls.iter().map(|p| p.number.to_string()).collect();
                CliError::PollNotFound {
                    number,
                    available: available.join(", "),
                }
                .into()
            })
    }
}

impl PollConfig {
    /// Check option count and quiz answer index
    pub fn validate(&self) -> Result<()> {
        if self.options.len() < 2 {
            return Err(CliError::ConfigError(format!(
                "poll {} needs at least 2 options, has {}",
                self.number,
                self.options.len()
            ))
            .into());
        }

        if let Some(correct) = self.correct_option_id {
            if self.kind != PollKind::Quiz {
                log::warn!(
                    "poll {} sets correct_option_id but is not a quiz",
                    self.number
                );
            } else if correct >= self.options.len() {
                return Err(CliError::ConfigError(format!(
                    "poll {} correct_option_id {} is out of range (0..{})",
                    self.number,
                    correct,
                    self.options.len()
                ))
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[markers]
block_end = ["Author:"]
question_start = ["Question"]
answer_start = ["Answer:"]

[limits]
max_chunk_length = 1000

[[polls]]
number = 0
id = "lunch"
question = "Where do we eat?"
options = ["Pizza", "Sushi"]

[[polls]]
number = 1
id = "capital"
question = "Capital of France?"
options = ["Lyon", "Paris", "Nice"]
type = "quiz"
is_anonymous = false
correct_option_id = 1
explanation = "Paris has been the capital since 987."
"#;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.polls.is_empty());
        assert_eq!(config.core.limits.max_chunk_length, 4000);
        assert!(config.core.markers.block_end.matches("Автор: X"));
    }

    #[test]
    fn test_parse_sample() {
        let config = CliConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.polls.len(), 2);
        assert_eq!(config.core.limits.max_chunk_length, 1000);
        assert_eq!(config.core.limits.max_block_length, 10_000);

        let lunch = config.poll(0).unwrap();
        assert_eq!(lunch.kind, PollKind::Regular);
        assert!(lunch.is_anonymous);
        assert!(!lunch.allows_multiple_answers);

        let quiz = config.poll(1).unwrap();
        assert_eq!(quiz.kind, PollKind::Quiz);
        assert!(!quiz.is_anonymous);
        assert_eq!(quiz.correct_option_id, Some(1));
    }

    #[test]
    fn test_core_config_carries_markers() {
        let config = CliConfig::from_toml_str(SAMPLE).unwrap();
        let core = CoreConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.core, core);
        assert!(core.markers.block_end.matches("author: me"));
        assert_eq!(core.limits.max_chunk_length, 1000);
    }

    #[test]
    fn test_poll_not_found() {
        let config = CliConfig::from_toml_str(SAMPLE).unwrap();
        let err = config.poll(7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Poll 7 not found (available: 0, 1)"
        );
    }

    #[test]
    fn test_duplicate_poll_numbers_rejected() {
        let content = r#"
[[polls]]
number = 0
id = "a"
question = "A?"
options = ["x", "y"]

[[polls]]
number = 0
id = "b"
question = "B?"
options = ["x", "y"]
"#;
        let err = CliConfig::from_toml_str(content).unwrap_err();
        assert!(err.to_string().contains("duplicate poll number 0"));
    }

    #[test]
    fn test_quiz_answer_out_of_range() {
        let content = r#"
[[polls]]
number = 3
id = "q"
question = "?"
options = ["x", "y"]
type = "quiz"
correct_option_id = 2
"#;
        let err = CliConfig::from_toml_str(content).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_single_option_poll_rejected() {
        let content = r#"
[[polls]]
number = 3
id = "q"
question = "?"
options = ["only"]
"#;
        assert!(CliConfig::from_toml_str(content).is_err());
    }

    #[test]
    fn test_zero_chunk_limit_rejected() {
        let err = CliConfig::from_toml_str("[limits]\nmax_chunk_length = 0\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_load_without_path() {
        let config = CliConfig::load(None).unwrap();
        assert!(config.polls.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.polls.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/quizpack.toml"))).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
