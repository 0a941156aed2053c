//! Loading article lists from JSON or YAML documents.
//!
//! Accepts either a bare list of articles or an object with an `articles`
//! key and an optional version identifier (`id` or `$id`). Harvested law
//! YAML has that shape, with `number`/`text` as article fields, and loads
//! without conversion.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ChangesetError, Result};
use crate::types::Article;

/// Serialization format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ChangesetError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// One version of a legal text as loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDocument {
    /// Version identifier declared in the document, if any.
    pub id: Option<String>,

    /// Articles in document order, with unique ids.
    pub articles: Vec<Article>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    List(Vec<Article>),
    Wrapped {
        #[serde(default, alias = "$id")]
        id: Option<String>,
        articles: Vec<Article>,
    },
}

/// Parse a document from a string.
///
/// `side` names the version ("old" or "new") in error messages.
pub fn parse_document(content: &str, format: InputFormat, side: &str) -> Result<ArticleDocument> {
    let raw: RawDocument = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Yaml => serde_yaml_ng::from_str(content)?,
    };

    let (id, articles) = match raw {
        RawDocument::List(articles) => (None, articles),
        RawDocument::Wrapped { id, articles } => (id, articles),
    };

    Ok(ArticleDocument {
        id,
        articles: assign_ids(articles, side)?,
    })
}

/// Load a document from a file, detecting the format from its extension.
pub fn load_document(path: &Path, side: &str) -> Result<ArticleDocument> {
    let format = InputFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let document = parse_document(&content, format, side)?;

    tracing::info!(
        path = %path.display(),
        articles = document.articles.len(),
        "Loaded {side} version"
    );

    Ok(document)
}

/// Fill in missing ids and enforce uniqueness within the list.
///
/// A missing id is taken from the display number, or from the position
/// (`art_<n>`, 1-based) when there is no number either.
fn assign_ids(mut articles: Vec<Article>, side: &str) -> Result<Vec<Article>> {
    let mut seen: HashSet<String> = HashSet::with_capacity(articles.len());

    for (index, article) in articles.iter_mut().enumerate() {
        if article.id.is_empty() {
            article.id = if article.display_number.is_empty() {
                format!("art_{}", index + 1)
            } else {
                article.display_number.clone()
            };
            tracing::warn!(id = %article.id, "Article without id in {side} version, derived one");
        }

        if !seen.insert(article.id.clone()) {
            return Err(ChangesetError::DuplicateArticleId {
                id: article.id.clone(),
                side: side.to_string(),
            });
        }
    }

    Ok(articles)
}
