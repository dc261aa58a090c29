//! Diagnostic tree printer for parsed sentences
//!
//! Renders references, actions and compiled sentences as an indented
//! tree, one node per line. Intended for logs and test failure output,
//! not for round-tripping.

use crate::{
    Action, Citation, IntervalEnd, Parsed, Reference, ReferenceAndAction, ReferenceKind, Sentence,
};

/// Trait for converting AST nodes to an indented diagnostic tree.
pub trait ToTree {
    /// Render this node at the given indentation level.
    fn to_tree(&self, indent: usize) -> String;
}

/// Helper to generate indentation string (two spaces per level).
fn indent_str(level: usize) -> String {
    "  ".repeat(level)
}

impl ToTree for Reference {
    fn to_tree(&self, indent: usize) -> String {
        let ind = indent_str(indent);
        match &self.kind {
            ReferenceKind::Text { id: Some(id) } => format!("{}text \"{}\"", ind, id),
            ReferenceKind::Text { id: None } => format!("{}text anaphoric", ind),
            ReferenceKind::Article { number, offset } => {
                let mut line = match number {
                    Some(n) => format!("{}article \"{}\"", ind, n),
                    None => format!("{}article", ind),
                };
                if *offset != 0 {
                    line.push_str(&format!(" offset={:+}", offset));
                }
                line
            }
            ReferenceKind::Division {
                kind,
                marker,
                index,
            } => match (marker, index) {
                (Some(m), _) => format!("{}division {} \"{}\"", ind, kind.label(), m),
                (None, Some(i)) => format!("{}division {} #{}", ind, kind.label(), i),
                (None, None) => format!("{}division {}", ind, kind.label()),
            },
            ReferenceKind::Portion { unit, ordinal } => {
                format!("{}portion {} #{}", ind, unit.label(), ordinal)
            }
            ReferenceKind::Words { text } => format!("{}words \"{}\"", ind, text),
            ReferenceKind::ParentChild { parent, child } => {
                let mut lines = vec![format!("{}in", ind)];
                lines.push(parent.to_tree(indent + 1));
                lines.push(child.to_tree(indent + 1));
                lines.join("\n")
            }
            ReferenceKind::Enumeration(members) => {
                let mut lines = vec![format!("{}enumeration", ind)];
                for member in members {
                    lines.push(member.to_tree(indent + 1));
                }
                lines.join("\n")
            }
            ReferenceKind::Interval { first, end } => {
                let mut lines = vec![format!("{}interval", ind)];
                lines.push(first.to_tree(indent + 1));
                match end {
                    IntervalEnd::Bounded(last) => lines.push(last.to_tree(indent + 1)),
                    IntervalEnd::Counted(n) => {
                        lines.push(format!("{}count {}", indent_str(indent + 1), n))
                    }
                }
                lines.join("\n")
            }
        }
    }
}

impl ToTree for Action {
    fn to_tree(&self, indent: usize) -> String {
        let ind = indent_str(indent);
        let mut lines = vec![format!("{}action {}", ind, self.kind.label())];
        for citation in &self.citations {
            lines.push(citation.to_tree(indent + 1));
        }
        lines.join("\n")
    }
}

impl ToTree for Citation {
    fn to_tree(&self, indent: usize) -> String {
        format!("{}citation \"{}\"", indent_str(indent), self.text)
    }
}

impl ToTree for ReferenceAndAction {
    fn to_tree(&self, indent: usize) -> String {
        let mut lines = vec![format!("{}amendment", indent_str(indent))];
        lines.push(self.reference.to_tree(indent + 1));
        lines.push(self.action.to_tree(indent + 1));
        lines.join("\n")
    }
}

impl ToTree for Parsed {
    fn to_tree(&self, indent: usize) -> String {
        match self {
            Parsed::ReferenceAndAction(ra) => ra.to_tree(indent),
            Parsed::Reference(r) => r.to_tree(indent),
            Parsed::Action(a) => a.to_tree(indent),
        }
    }
}

impl ToTree for Sentence {
    fn to_tree(&self, indent: usize) -> String {
        self.parsed.to_tree(indent)
    }
}

/// Convert a parsed sentence to its diagnostic tree form.
pub fn to_tree(sentence: &Sentence) -> String {
    sentence.to_tree(0)
}
