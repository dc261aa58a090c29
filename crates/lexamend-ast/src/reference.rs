//! Reference AST nodes
//!
//! A reference names a fragment of a legal text: a portion ("la seconde
//! phrase"), a division ("le II", "le chapitre III"), an article, a quoted
//! run of words, or a composition of those ("du dernier alinéa du II").

use serde::{Deserialize, Serialize};
use crate::Span;

/// A reference to a fragment of a legal text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub kind: ReferenceKind,
    pub span: Span,
}

impl Reference {
    pub fn new(kind: ReferenceKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReferenceKind {
    /// A whole text: `le code général des impôts`, `la loi n° 86-1067`.
    /// `id` is `None` for anaphoric forms ("le même code", "la présente loi").
    Text { id: Option<String> },

    /// An article: `l'article 224`, `l'article L. 112-3`.
    /// `number` is `None` for purely relative forms; `offset` is +1 for
    /// "suivant" and -1 for "précédent", 0 otherwise.
    Article { number: Option<String>, offset: i32 },

    /// A structural division: `le II`, `le 1°`, `le chapitre III`,
    /// `la deuxième section`. Exactly one of `marker` and `index` is set.
    Division {
        kind: DivisionKind,
        marker: Option<String>,
        index: Option<i64>,
    },

    /// A textual sub-unit of the running content: `le dernier alinéa`,
    /// `la seconde phrase`. Positive ordinals are 1-based; negative ones
    /// count from the end (-1 = last).
    Portion { unit: PortionUnit, ordinal: i64 },

    /// A quoted literal target: `les mots : « il est sursis »`
    Words { text: String },

    /// Containment: `X du Y`. `parent` is always the coarser scope,
    /// whatever the surface word order.
    ParentChild {
        parent: Box<Reference>,
        child: Box<Reference>,
    },

    /// Siblings addressed by one action: `les II et III`
    Enumeration(Vec<Reference>),

    /// A contiguous run: `les 1° à 4°`, `les trois derniers alinéas`
    Interval {
        first: Box<Reference>,
        end: IntervalEnd,
    },
}

/// How an interval is closed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IntervalEnd {
    /// Explicit last member: `les 1° à 4°`
    Bounded(Box<Reference>),
    /// Member count: `les trois derniers alinéas`
    Counted(u32),
}

/// The closed set of structural division kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DivisionKind {
    /// A bare numbered or lettered item: "II", "1°", "A"
    Item,
    Part,
    Book,
    Title,
    Subtitle,
    Chapter,
    Section,
    Subsection,
    Paragraph,
    Subparagraph,
}

impl DivisionKind {
    /// Every kind, coarsest first
    pub const ALL: [DivisionKind; 10] = [
        DivisionKind::Part,
        DivisionKind::Book,
        DivisionKind::Title,
        DivisionKind::Subtitle,
        DivisionKind::Chapter,
        DivisionKind::Section,
        DivisionKind::Subsection,
        DivisionKind::Paragraph,
        DivisionKind::Subparagraph,
        DivisionKind::Item,
    ];

    /// Label for diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            DivisionKind::Item => "item",
            DivisionKind::Part => "part",
            DivisionKind::Book => "book",
            DivisionKind::Title => "title",
            DivisionKind::Subtitle => "subtitle",
            DivisionKind::Chapter => "chapter",
            DivisionKind::Section => "section",
            DivisionKind::Subsection => "subsection",
            DivisionKind::Paragraph => "paragraph",
            DivisionKind::Subparagraph => "subparagraph",
        }
    }

    /// The French noun that introduces the kind in citation prose, lowercase
    /// and accent-free. Bare items ("le II", "le 1°") have none.
    pub fn french_noun(&self) -> Option<&'static str> {
        match self {
            DivisionKind::Item => None,
            DivisionKind::Part => Some("partie"),
            DivisionKind::Book => Some("livre"),
            DivisionKind::Title => Some("titre"),
            DivisionKind::Subtitle => Some("sous-titre"),
            DivisionKind::Chapter => Some("chapitre"),
            DivisionKind::Section => Some("section"),
            DivisionKind::Subsection => Some("sous-section"),
            DivisionKind::Paragraph => Some("paragraphe"),
            DivisionKind::Subparagraph => Some("sous-paragraphe"),
        }
    }
}

/// Units a portion can address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortionUnit {
    /// An "alinéa": one unnumbered block of a division's content
    Paragraph,
    /// A "phrase": one sentence of the running text
    Sentence,
}

impl PortionUnit {
    /// Label for diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            PortionUnit::Paragraph => "paragraph",
            PortionUnit::Sentence => "sentence",
        }
    }
}
