//! Changeset output generation.
//!
//! Pure serialization: no decisions about what changed are made here.

mod text;
mod writer;

use std::fmt;
use std::str::FromStr;

use crate::error::{ChangesetError, Result};
use crate::types::ChangeSet;

pub use text::{render_text, render_text_with_width, sentence_counts};
pub use writer::{generate_json, generate_yaml, parse_json, parse_yaml, save_output};

/// Output representation of a changeset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Text,
}

impl OutputFormat {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ChangesetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(ChangesetError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Render a changeset in the requested format.
pub fn render(changeset: &ChangeSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => generate_json(changeset),
        OutputFormat::Yaml => generate_yaml(changeset),
        OutputFormat::Text => Ok(render_text(changeset)),
    }
}
