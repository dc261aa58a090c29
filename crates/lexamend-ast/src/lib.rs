//! lexamend-ast - Typed trees for French legislative amendment sentences
//!
//! Defines the three node families produced by the parser:
//! - `Reference`: the cited location ("la seconde phrase du dernier alinéa du II")
//! - `Action`: the amendment operation ("est remplacée par ...") with its
//!   quoted replacement citations
//! - `Sentence`: one parsed amendment sentence, combining the two
//!
//! All nodes carry byte spans into the original sentence text and serialize
//! with serde so downstream consumers can persist parse results as JSON.

mod action;
mod printer;
mod reference;
mod span;

pub use action::*;
pub use printer::*;
pub use reference::*;
pub use span::*;

use serde::{Deserialize, Serialize};

/// A reference paired with the action applied at that location.
///
/// The canonical shape of a complete amendment sentence:
/// "La seconde phrase du dernier alinéa du II est remplacée par ..."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceAndAction {
    pub reference: Reference,
    pub action: Action,
    pub span: Span,
}

/// What the parser recognized in one amendment sentence.
///
/// Amendment prose elides parts that are recoverable from context, so a
/// sentence may carry only a reference (the action lives in a sibling
/// sentence) or only an action (the target was named earlier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Parsed {
    ReferenceAndAction(ReferenceAndAction),
    Reference(Reference),
    Action(Action),
}

/// One parsed amendment sentence.
///
/// `span` covers exactly the input the grammar consumed; anything after
/// `span.end` was left unrecognized and is recoverable via [`Sentence::remaining`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub parsed: Parsed,
    pub span: Span,
}

impl Sentence {
    pub fn new(parsed: Parsed, span: Span) -> Self {
        Self { parsed, span }
    }

    /// The trailing input the grammar did not consume, for diagnostics.
    pub fn remaining<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.end.min(source.len())..]
    }

    /// The reference part, whichever variant carries one.
    pub fn reference(&self) -> Option<&Reference> {
        match &self.parsed {
            Parsed::ReferenceAndAction(ra) => Some(&ra.reference),
            Parsed::Reference(r) => Some(r),
            Parsed::Action(_) => None,
        }
    }

    /// The action part, whichever variant carries one.
    pub fn action(&self) -> Option<&Action> {
        match &self.parsed {
            Parsed::ReferenceAndAction(ra) => Some(&ra.action),
            Parsed::Action(a) => Some(a),
            Parsed::Reference(_) => None,
        }
    }
}
