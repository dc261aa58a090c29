//! Sentence-level composition and the batch entry point
//!
//! One amendment sentence usually reads reference-then-action; either half
//! can stand alone. The composer tries the reference grammar first, hands
//! the remainder to the action classifier, and keeps whichever halves
//! parsed. Trailing free prose ("… selon des modalités fixées par décret")
//! is left unconsumed and reachable through `Sentence::remaining`.

use lexamend_ast::{Parsed, ReferenceAndAction, Sentence, Span};
use lexamend_lexer::TokenKind;
use serde::{Deserialize, Serialize};

use crate::action::parse_action;
use crate::combinators::{attempt, optional, Mismatch, PResult};
use crate::error::ParseError;
use crate::reference::parse_reference;
use crate::scan::{Scanner, UNBALANCED_QUOTE};

/// Parse one amendment sentence
pub fn parse_sentence(source: &str) -> Result<Sentence, ParseError> {
    let mut s = Scanner::new(source);
    let start = s.offset();

    // insertion anchor: "Après le III, il est inséré …"
    let _ = optional(&mut s, eat_anchor);

    let parsed = match attempt(&mut s, parse_reference) {
        Ok(reference) => {
            match attempt(&mut s, |s| {
                if s.at(TokenKind::Comma) {
                    s.advance();
                }
                parse_action(s)
            }) {
                Ok(action) => {
                    let span = reference.span.merge(action.span);
                    Parsed::ReferenceAndAction(ReferenceAndAction {
                        reference,
                        action,
                        span,
                    })
                }
                Err(action_miss) => {
                    // a malformed citation is a real failure, not free prose
                    if action_miss.expected == UNBALANCED_QUOTE {
                        return Err(ParseError::from_mismatch(source, action_miss));
                    }
                    Parsed::Reference(reference)
                }
            }
        }
        Err(reference_miss) => match attempt(&mut s, parse_action) {
            Ok(action) => Parsed::Action(action),
            Err(action_miss) => {
                let deepest = if action_miss.at > reference_miss.at {
                    action_miss
                } else {
                    reference_miss
                };
                return Err(ParseError::from_mismatch(source, deepest));
            }
        },
    };

    Ok(Sentence::new(parsed, Span::new(start, s.prev_end())))
}

/// "Après"/"Avant" heading an insertion sentence
fn eat_anchor<'a>(s: &mut Scanner<'a>) -> PResult<()> {
    if s.at_keyword("apres") || s.at_keyword("avant") {
        s.advance();
        Ok(())
    } else {
        Err(Mismatch::new("'après' or 'avant'", s.offset()))
    }
}

/// One extracted amendment block: a stable id, its position in the source
/// instrument, and the sentence text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmendmentBlock {
    pub id: String,
    pub index: usize,
    pub text: String,
}

impl AmendmentBlock {
    pub fn new(id: impl Into<String>, index: usize, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            index,
            text: text.into(),
        }
    }
}

/// The parse result for one block, with its provenance
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub block: AmendmentBlock,
    pub result: Result<Sentence, ParseError>,
}

/// Parse extracted blocks independently, preserving input order. A failure
/// in one block never affects the others.
pub fn parse_blocks(blocks: &[AmendmentBlock]) -> Vec<BatchOutcome> {
    blocks
        .iter()
        .map(|block| BatchOutcome {
            block: block.clone(),
            result: parse_sentence(&block.text),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexamend_ast::{ActionKind, PortionUnit, ReferenceKind};

    #[test]
    fn test_reference_and_action_compose() {
        let source = "La seconde phrase du dernier alinéa du II est remplacée par les mots : « il est sursis »";
        let sentence = parse_sentence(source).unwrap();
        let reference = sentence.reference().expect("reference half");
        let action = sentence.action().expect("action half");
        assert!(matches!(reference.kind, ReferenceKind::ParentChild { .. }));
        assert_eq!(action.kind, ActionKind::Replace);
        assert_eq!(action.citations[0].text, "il est sursis");
        assert_eq!(sentence.remaining(source), "");
    }

    #[test]
    fn test_anchored_insertion() {
        let source = "Après le III, il est inséré un III bis ainsi rédigé : « III bis.-Il y est pourvu. »";
        let sentence = parse_sentence(source).unwrap();
        let reference = sentence.reference().expect("reference half");
        assert_eq!(
            reference.kind,
            ReferenceKind::Division {
                kind: lexamend_ast::DivisionKind::Item,
                marker: Some("III".to_string()),
                index: None,
            }
        );
        let action = sentence.action().expect("action half");
        assert_eq!(action.kind, ActionKind::Create);
        assert_eq!(action.citations[0].text, "III bis.-Il y est pourvu.");
    }

    #[test]
    fn test_action_alone() {
        let sentence = parse_sentence("Est abrogée la disposition contraire").unwrap();
        match sentence.parsed {
            Parsed::Action(action) => assert_eq!(action.kind, ActionKind::Delete),
            other => panic!("expected bare action, got {:?}", other),
        }
    }

    #[test]
    fn test_reference_alone_keeps_remainder() {
        let source = "Le dernier alinéa du II selon des modalités fixées par décret";
        let sentence = parse_sentence(source).unwrap();
        assert!(matches!(sentence.parsed, Parsed::Reference(_)));
        assert_eq!(
            sentence.remaining(source),
            " selon des modalités fixées par décret"
        );
    }

    #[test]
    fn test_unparseable_sentence_is_an_explicit_failure() {
        let err = parse_sentence("Ceci ne cite aucun fragment").unwrap_err();
        assert!(matches!(err, ParseError::Unrecognized { .. }));
    }

    #[test]
    fn test_unbalanced_quotation_in_reference_position() {
        let err = parse_sentence("Les mots : « sans fin sont remplacés").unwrap_err();
        assert!(matches!(err, ParseError::UnbalancedQuotation { .. }));
    }

    #[test]
    fn test_unbalanced_quotation_in_action_position() {
        let err =
            parse_sentence("Le II est remplacé par les mots : « sans fin").unwrap_err();
        assert!(matches!(err, ParseError::UnbalancedQuotation { .. }));
    }

    #[test]
    fn test_sentence_portion_composes() {
        let source = "La seconde phrase est supprimée";
        let sentence = parse_sentence(source).unwrap();
        let reference = sentence.reference().unwrap();
        assert_eq!(
            reference.kind,
            ReferenceKind::Portion {
                unit: PortionUnit::Sentence,
                ordinal: 2,
            }
        );
        assert_eq!(sentence.action().unwrap().kind, ActionKind::Delete);
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let blocks = vec![
            AmendmentBlock::new("a-1", 0, "Le dernier alinéa du II est abrogé"),
            AmendmentBlock::new("a-2", 1, "Texte sans citation reconnaissable"),
            AmendmentBlock::new("a-3", 2, "Le 1° du I est supprimé"),
        ];
        let outcomes = parse_blocks(&blocks);
        assert_eq!(outcomes.len(), 3);
        let ids: Vec<&str> = outcomes.iter().map(|o| o.block.id.as_str()).collect();
        assert_eq!(ids, vec!["a-1", "a-2", "a-3"]);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
        assert!(outcomes[2].result.is_ok());
    }
}
