//! Action AST nodes

use serde::{Deserialize, Serialize};
use crate::Span;

/// A classified amendment action, with any quoted replacement content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    /// Quoted content segments following the verb, in source order.
    /// Empty for actions whose content arrives in later blocks
    /// ("est remplacée par trois alinéas ainsi rédigés :").
    pub citations: Vec<Citation>,
    pub span: Span,
}

impl Action {
    pub fn new(kind: ActionKind, citations: Vec<Citation>, span: Span) -> Self {
        Self {
            kind,
            citations,
            span,
        }
    }
}

/// What the amendment does to the referenced fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Insert or append new content ("il est inséré", "est complété par")
    Create,
    /// Substitute the referenced fragment ("est remplacé par",
    /// "est ainsi rédigé")
    Replace,
    /// Remove the referenced fragment ("est abrogé", "sont supprimés")
    Delete,
    /// Restore a repealed division, writing it anew ("est ainsi rétabli")
    CreateOrReplace,
}

impl ActionKind {
    /// Label for diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Create => "create",
            ActionKind::Replace => "replace",
            ActionKind::Delete => "delete",
            ActionKind::CreateOrReplace => "create-or-replace",
        }
    }
}

/// One delimited quotation of replacement or insertion content.
/// `span` covers the delimiters; `text` is the inner content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub text: String,
    pub span: Span,
}

impl Citation {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}
