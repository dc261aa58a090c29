//! Lexamend Navigator - Resolving navigation steps against documents
//!
//! Applies a compiled path to a block tree loaded from the interchange
//! form and returns the addressed region: a run of sibling blocks, one
//! sentence, or a word-level byte span. Resolution is deterministic and
//! never falls back to a coarser scope; every failure names the step
//! that could not be applied and the scope it was applied in.

mod error;
mod locate;
mod marker;
mod segment;

pub use error::{NavigationError, NavigationErrorKind};
pub use locate::{locate, locate_steps, Located};
pub use segment::sentence_spans;
