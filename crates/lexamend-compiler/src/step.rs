//! Navigation step definitions

use std::fmt;

use lexamend_ast::{DivisionKind, PortionUnit};
use serde::{Deserialize, Serialize};

/// One step of a navigation path, applied left to right from the
/// document root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavigationStep {
    /// Re-anchor at the root of a text. `id` names the text for
    /// diagnostics; `None` is the enclosing text itself.
    Scope { id: Option<String> },

    /// Enter the division matched by marker or by 1-based ordinal
    /// (negative = from the end)
    Division {
        kind: DivisionKind,
        marker: Option<String>,
        index: Option<i64>,
    },

    /// Select one alinéa or sentence by 1-based ordinal
    /// (negative = from the end)
    Portion { unit: PortionUnit, ordinal: i64 },

    /// Select the first literal occurrence of `needle`
    Words { needle: String },
}

impl fmt::Display for NavigationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationStep::Scope { id: Some(id) } => write!(f, "scope \"{}\"", id),
            NavigationStep::Scope { id: None } => write!(f, "scope (enclosing text)"),
            NavigationStep::Division {
                kind,
                marker: Some(marker),
                ..
            } => write!(f, "division {} \"{}\"", kind.label(), marker),
            NavigationStep::Division {
                kind,
                index: Some(index),
                ..
            } => write!(f, "division {} #{}", kind.label(), index),
            NavigationStep::Division { kind, .. } => write!(f, "division {}", kind.label()),
            NavigationStep::Portion { unit, ordinal } => {
                write!(f, "portion {} #{}", unit.label(), ordinal)
            }
            NavigationStep::Words { needle } => write!(f, "words \"{}\"", needle),
        }
    }
}

/// A compiled path: the steps plus anything lost in lowering
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompiledPath {
    pub steps: Vec<NavigationStep>,
    pub warnings: Vec<CompileWarning>,
}

/// Breadth the step language cannot express, reported instead of dropped
/// silently
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompileWarning {
    /// An enumeration narrowed to its first member
    PartialEnumeration { dropped: usize },
    /// An interval narrowed to its first member
    PartialInterval,
}

impl fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileWarning::PartialEnumeration { dropped } => write!(
                f,
                "enumeration narrowed to its first member ({} dropped)",
                dropped
            ),
            CompileWarning::PartialInterval => {
                write!(f, "interval narrowed to its first member")
            }
        }
    }
}
