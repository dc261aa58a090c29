//! Lexamend Parser - Recursive-descent parsing of amendment sentences
//!
//! Layered bottom-up:
//! - `scan`: token cursor with checkpoint/rewind over the lexer's output
//! - `combinators`: attempt/alternative/optional/repeat backtracking core
//! - `reference`: the citation grammar ("du dernier alinéa du II …")
//! - `action`: the amendment verb classifier and citation collector
//! - `sentence`: sentence composition and the batch entry point

mod action;
mod combinators;
mod error;
mod reference;
mod scan;
mod sentence;

pub use action::parse_action;
pub use combinators::{alternative, attempt, optional, repeat, Mismatch, PResult};
pub use error::ParseError;
pub use reference::parse_reference;
pub use scan::{Checkpoint, Scanner};
pub use sentence::{parse_blocks, parse_sentence, AmendmentBlock, BatchOutcome};

use lexamend_ast::Sentence;

/// Parse one amendment sentence
pub fn parse(source: &str) -> Result<Sentence, ParseError> {
    parse_sentence(source)
}
