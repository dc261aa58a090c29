//! Lowering references to navigation steps
//!
//! Depth-first, parent before child, so the step list reads coarsest scope
//! first. Compilation is total: breadth the step language cannot express
//! (enumerations, intervals) degrades to the first member plus a warning
//! instead of failing.

use lexamend_ast::{Reference, ReferenceKind};

use crate::step::{CompileWarning, CompiledPath, NavigationStep};

/// Compile a reference into the step sequence that navigates to it
pub fn compile(reference: &Reference) -> CompiledPath {
    let mut path = CompiledPath::default();
    walk(reference, &mut path);
    path
}

fn walk(reference: &Reference, out: &mut CompiledPath) {
    match &reference.kind {
        ReferenceKind::Text { id } => {
            out.steps.push(NavigationStep::Scope { id: id.clone() });
        }
        ReferenceKind::Article { number, offset } => {
            out.steps.push(NavigationStep::Scope {
                id: article_scope_id(number.as_deref(), *offset),
            });
        }
        ReferenceKind::Division {
            kind,
            marker,
            index,
        } => {
            out.steps.push(NavigationStep::Division {
                kind: *kind,
                marker: marker.clone(),
                index: *index,
            });
        }
        ReferenceKind::Portion { unit, ordinal } => {
            out.steps.push(NavigationStep::Portion {
                unit: *unit,
                ordinal: *ordinal,
            });
        }
        ReferenceKind::Words { text } => {
            out.steps.push(NavigationStep::Words {
                needle: text.clone(),
            });
        }
        ReferenceKind::ParentChild { parent, child } => {
            walk(parent, out);
            walk(child, out);
        }
        ReferenceKind::Enumeration(members) => {
            if let Some(first) = members.first() {
                walk(first, out);
            }
            if members.len() > 1 {
                out.warnings.push(CompileWarning::PartialEnumeration {
                    dropped: members.len() - 1,
                });
            }
        }
        ReferenceKind::Interval { first, .. } => {
            walk(first, out);
            out.warnings.push(CompileWarning::PartialInterval);
        }
    }
}

/// Diagnostic identifier for the article a scope step re-anchors to
fn article_scope_id(number: Option<&str>, offset: i32) -> Option<String> {
    match (number, offset) {
        (Some(number), 0) => Some(format!("article {}", number)),
        (Some(number), offset) => Some(format!("article {} {:+}", number, offset)),
        (None, 1) => Some("article suivant".to_string()),
        (None, -1) => Some("article précédent".to_string()),
        (None, _) => None,
    }
}
