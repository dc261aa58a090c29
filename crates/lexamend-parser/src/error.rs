//! Parse errors surfaced to callers
//!
//! Grammar-internal mismatches stay internal; the sentence entry points
//! convert the deepest one into a `ParseError`.

use lexamend_ast::Span;
use thiserror::Error;

use crate::combinators::Mismatch;
use crate::scan::UNBALANCED_QUOTE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No grammar rule matched. The span runs from the deepest point any
    /// rule reached to the end of the sentence.
    #[error("unrecognized amendment sentence: expected {expected} at byte {}", .span.start)]
    Unrecognized {
        expected: &'static str,
        span: Span,
    },

    /// A quotation opened with «, “ or " and never closed
    #[error("unbalanced quotation mark at byte {}", .span.start)]
    UnbalancedQuotation { span: Span },
}

impl ParseError {
    pub(crate) fn from_mismatch(source: &str, mismatch: Mismatch) -> Self {
        if mismatch.expected == UNBALANCED_QUOTE {
            ParseError::UnbalancedQuotation {
                span: Span::new(mismatch.at, mismatch.at),
            }
        } else {
            ParseError::Unrecognized {
                expected: mismatch.expected,
                span: Span::new(mismatch.at.min(source.len()), source.len()),
            }
        }
    }

    /// Where in the sentence the failure sits
    pub fn span(&self) -> Span {
        match self {
            ParseError::Unrecognized { span, .. } => *span,
            ParseError::UnbalancedQuotation { span } => *span,
        }
    }
}
