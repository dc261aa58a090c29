use lexamend_compiler::NavigationStep;
use thiserror::Error;

/// A navigation step that could not be applied to the document
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot apply {step} in {scope}: {kind}")]
pub struct NavigationError {
    /// The step that failed
    pub step: NavigationStep,
    /// Description of the scope the step was applied in
    pub scope: String,
    /// What went wrong
    pub kind: NavigationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationErrorKind {
    #[error("no block carries the marker \"{marker}\"")]
    MarkerNotFound { marker: String },

    #[error("position {ordinal} is out of range for {len} element(s)")]
    OrdinalOutOfRange { ordinal: i64, len: usize },

    #[error("the scope is empty")]
    EmptyScope,

    #[error("the words \"{needle}\" do not occur")]
    WordsNotFound { needle: String },

    #[error("the step cannot refine the current selection")]
    Unsupported,
}
