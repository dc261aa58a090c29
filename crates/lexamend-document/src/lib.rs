//! Lexamend Document - The block tree amendments navigate
//!
//! A document is the scraped rendition of one legal text: blocks of
//! running text in reading order, nested when the source markup nested
//! them, flat when it did not. Nothing here interprets markers or
//! structure; the navigator does that. The shape mirrors the JSON the
//! extraction layer emits.

mod error;

pub use error::DocumentError;

use lexamend_ast::Span;
use serde::{Deserialize, Serialize};

/// One legal text as scraped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: Option<String>,
    pub blocks: Vec<Block>,
}

/// One block of running text. `markup_span` is the block's byte range in
/// the source markup, when the scraper kept one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub text: String,
    #[serde(default)]
    pub children: Vec<Block>,
    #[serde(default)]
    pub markup_span: Option<Span>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            title: None,
            blocks,
        }
    }

    pub fn with_title(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: Some(title.into()),
            blocks,
        }
    }

    /// Deserialize a scraped document
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to JSON
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Block {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
            markup_span: None,
        }
    }

    pub fn with_children(text: impl Into<String>, children: Vec<Block>) -> Self {
        Self {
            text: text.into(),
            children,
            markup_span: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraped_json_with_minimal_fields() {
        let json = r#"{
            "blocks": [
                {"text": "II.-Chapeau."},
                {"text": "Suite.", "children": [{"text": "a) Détail."}]}
            ]
        }"#;
        let document = Document::from_json(json).unwrap();
        assert_eq!(document.title, None);
        assert_eq!(document.blocks.len(), 2);
        assert_eq!(document.blocks[1].children[0].text, "a) Détail.");
        assert_eq!(document.blocks[0].markup_span, None);
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let document = Document::with_title(
            "Article 224",
            vec![
                Block::new("I.-Ouverture."),
                Block::with_children("II.-Chapeau.", vec![Block::new("Premier alinéa.")]),
            ],
        );
        let json = document.to_json().unwrap();
        let back = Document::from_json(&json).unwrap();
        assert_eq!(back, document);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Document::from_json("{not json").is_err());
    }
}
