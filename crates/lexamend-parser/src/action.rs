//! Amendment verb classifier
//!
//! Recognizes the operative clause of an amendment sentence ("est
//! remplacée par …", "il est inséré …", "sont abrogés") and collects the
//! quoted citations carrying new content. The verb lexicon is closed: an
//! unknown verb is a mismatch, never a guess.

use lexamend_ast::{Action, ActionKind, Citation, Span};
use lexamend_lexer::{inflected_eq, TokenKind};

use crate::combinators::{attempt, Mismatch, PResult};
use crate::scan::Scanner;

/// Folded participle stems and the operation each classifies to. The flag
/// marks verbs whose content must be introduced by "par".
const VERB_STEMS: &[(&str, ActionKind, bool)] = &[
    ("remplace", ActionKind::Replace, true),
    ("redige", ActionKind::Replace, false),
    ("modifie", ActionKind::Replace, false),
    ("insere", ActionKind::Create, false),
    ("ajoute", ActionKind::Create, false),
    ("complete", ActionKind::Create, false),
    ("abroge", ActionKind::Delete, false),
    ("supprime", ActionKind::Delete, false),
    ("retabli", ActionKind::CreateOrReplace, false),
];

/// Parse the action clause: optional subject pronoun, copula, a participle
/// from the closed lexicon, the content descriptor, then quoted citations.
pub fn parse_action<'a>(s: &mut Scanner<'a>) -> PResult<Action> {
    attempt(s, |s| {
        let start = s.offset();

        // "il est inséré", "il y est ajouté"
        if s.at_keyword("il") {
            s.advance();
            if s.at_keyword("y") {
                s.advance();
            }
        }

        if s.at_keyword("est") || s.at_keyword("sont") {
            s.advance();
        } else {
            return Err(Mismatch::new("'est' or 'sont'", s.offset()));
        }

        if s.at_keyword("ainsi") {
            s.advance();
        }

        let (kind, wants_par) = match s.word().and_then(classify_verb) {
            Some(found) => found,
            None => return Err(Mismatch::new("an amendment verb", s.offset())),
        };
        s.advance();

        if wants_par {
            // "sont remplacés respectivement par …"
            if s.at_keyword("respectivement") {
                s.advance();
            }
            s.eat_keyword("par")?;
        }

        eat_content_descriptor(s);
        if s.at(TokenKind::Colon) {
            s.advance();
        }
        let citations = parse_citations(s)?;

        Ok(Action::new(kind, citations, Span::new(start, s.prev_end())))
    })
}

fn classify_verb(word: &str) -> Option<(ActionKind, bool)> {
    VERB_STEMS
        .iter()
        .find(|(stem, _, _)| inflected_eq(word, stem))
        .map(|(_, kind, wants_par)| (*kind, *wants_par))
}

/// The prose between verb and citations: "les mots", "un III bis ainsi
/// rédigé", "trois alinéas ainsi rédigés". Consumed, not modeled.
fn eat_content_descriptor(s: &mut Scanner) {
    loop {
        match s.peek() {
            TokenKind::Word
            | TokenKind::Number
            | TokenKind::OrdinalNumber
            | TokenKind::Degree
            | TokenKind::Apostrophe
            | TokenKind::Period
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::Dash => {
                s.advance();
            }
            _ => break,
        }
    }
}

/// Zero or more quotations, separated by commas, semicolons or "et".
/// An opening mark that never closes fails the whole action.
fn parse_citations<'a>(s: &mut Scanner<'a>) -> PResult<Vec<Citation>> {
    let mut citations = Vec::new();
    loop {
        let entry = s.checkpoint();
        if !citations.is_empty() {
            while s.at(TokenKind::Comma) || s.at(TokenKind::Semicolon) || s.at_keyword("et") {
                s.advance();
            }
        }
        match s.peek() {
            TokenKind::OpenQuote | TokenKind::StraightQuote => {
                let (text, span) = s.eat_quotation()?;
                citations.push(Citation::new(text, span));
            }
            _ => {
                s.rewind(entry);
                break;
            }
        }
    }
    Ok(citations)
}
