//! Generate config command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use quizpack_core::{CoreConfig, MarkerSet};
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Marker preset to start from
    #[arg(short, long, value_enum, default_value = "russian")]
    pub preset: Preset,

    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Built-in marker presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Вопрос / Ответ: / Автор:
    Russian,
    /// Question / Answer: / Author:
    English,
}

impl Preset {
    /// Code of the embedded core preset
    pub fn code(&self) -> &'static str {
        match self {
            Preset::Russian => "ru",
            Preset::English => "en",
        }
    }
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = generate_template(self.preset)?;

        match &self.output {
            Some(path) => {
                fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                println!("✓ Configuration template written to {}", path.display());
                println!();
                println!("Next steps:");
                println!("1. Edit the markers to match your question pack");
                println!("2. Validate it:");
                println!("   quizpack validate --config {}", path.display());
                println!("3. Use it:");
                println!("   quizpack question -i pack.txt --config {}", path.display());
            }
            None => print!("{template}"),
        }
        Ok(())
    }
}

/// Generate template configuration content from an embedded preset
pub fn generate_template(preset: Preset) -> Result<String> {
    let config = CoreConfig::preset(preset.code()).map_err(CliError::from)?;
    let name = config
        .metadata
        .as_ref()
        .map_or(preset.code(), |meta| meta.name.as_str());
    let markers = &config.markers;

    Ok(format!(
        r#"# quizpack configuration ({name} markers)

# Line prefixes, matched case-insensitively after trimming
[markers]
# A block ends at (and includes) a line starting with one of these
block_end = {block_end}
# Lines before the first of these are dropped as preamble
question_start = {question_start}
# This line and everything after it is sent as a spoiler
answer_start = {answer_start}

# Sizes in characters
[limits]
# One outbound message
max_chunk_length = {max_chunk_length}
# A drawn block longer than this is rejected
max_block_length = {max_block_length}

# Predefined polls (optional)
# [[polls]]
# number = 0
# id = "lunch"
# question = "Where do we eat?"
# options = ["Pizza", "Sushi"]
# type = "regular"            # or "quiz"
# is_anonymous = true
# allows_multiple_answers = false
# correct_option_id = 1       # quiz only, zero-based
# explanation = "..."         # quiz only
"#,
        block_end = toml_array(&markers.block_end),
        question_start = toml_array(&markers.question_start),
        answer_start = toml_array(&markers.answer_start),
        max_chunk_length = config.limits.max_chunk_length,
        max_block_length = config.limits.max_block_length,
    ))
}

fn toml_array(markers: &MarkerSet) -> String {
    toml::Value::Array(
        markers
            .prefixes()
            .iter()
            .cloned()
            .map(toml::Value::String)
            .collect(),
    )
    .to_string()
}
