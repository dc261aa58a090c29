//! Lexamend Compiler - Lowering references to navigation steps
//!
//! Turns the parser's reference tree into a flat, coarsest-first list of
//! navigation steps a document navigator can apply. Lowering never fails;
//! breadth the step language cannot express is reported as warnings.

mod compile;
mod step;

pub use compile::compile;
pub use step::{CompileWarning, CompiledPath, NavigationStep};
