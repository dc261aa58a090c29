//! Backtracking primitives over the scanner
//!
//! A failed parse is a `Mismatch` value, not an error allocation. Ordered
//! choice tries alternatives in declaration order and keeps the first that
//! sticks. Every parser built on these obeys one contract: on `Err` the
//! cursor is back where the parser started.

use crate::scan::Scanner;

/// A failed grammar expectation at a byte offset. Mismatches drive ordered
/// choice; only the sentence entry points turn one into a `ParseError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub expected: &'static str,
    pub at: usize,
}

impl Mismatch {
    pub fn new(expected: &'static str, at: usize) -> Self {
        Self { expected, at }
    }
}

pub type PResult<T> = Result<T, Mismatch>;

/// Run `f`; on failure restore the cursor to where it was
pub fn attempt<'a, T>(
    s: &mut Scanner<'a>,
    f: impl FnOnce(&mut Scanner<'a>) -> PResult<T>,
) -> PResult<T> {
    let checkpoint = s.checkpoint();
    match f(s) {
        Ok(value) => Ok(value),
        Err(mismatch) => {
            s.rewind(checkpoint);
            Err(mismatch)
        }
    }
}

/// Ordered choice: the first alternative that parses wins. On failure the
/// deepest mismatch is reported, so "expected X" points at the furthest
/// point any alternative reached.
pub fn alternative<'a, T>(
    s: &mut Scanner<'a>,
    expected: &'static str,
    parsers: &[fn(&mut Scanner) -> PResult<T>],
) -> PResult<T> {
    let mut deepest = Mismatch::new(expected, s.offset());
    for parser in parsers {
        match attempt(s, *parser) {
            Ok(value) => return Ok(value),
            Err(mismatch) => {
                if mismatch.at > deepest.at {
                    deepest = mismatch;
                }
            }
        }
    }
    Err(deepest)
}

/// Run `f` if it parses, leaving the cursor untouched when it does not
pub fn optional<'a, T>(
    s: &mut Scanner<'a>,
    f: impl FnOnce(&mut Scanner<'a>) -> PResult<T>,
) -> Option<T> {
    attempt(s, f).ok()
}

/// Repeat `f` as long as it parses. Fails, restoring the cursor, when
/// fewer than `min` repetitions succeed.
pub fn repeat<'a, T>(
    s: &mut Scanner<'a>,
    min: usize,
    mut f: impl FnMut(&mut Scanner<'a>) -> PResult<T>,
) -> PResult<Vec<T>> {
    let entry = s.checkpoint();
    let mut items = Vec::new();
    loop {
        match attempt(s, &mut f) {
            Ok(item) => items.push(item),
            Err(mismatch) => {
                if items.len() < min {
                    s.rewind(entry);
                    return Err(mismatch);
                }
                return Ok(items);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexamend_lexer::TokenKind;

    fn any_word<'a>(s: &mut Scanner<'a>) -> PResult<()> {
        s.eat(TokenKind::Word).map(|_| ())
    }

    fn never<'a>(s: &mut Scanner<'a>) -> PResult<()> {
        Err(Mismatch::new("nothing", s.offset()))
    }

    #[test]
    fn test_attempt_restores_cursor_on_failure() {
        let mut s = Scanner::new("le II");
        let result = attempt(&mut s, |s| {
            s.eat(TokenKind::Word)?;
            s.eat(TokenKind::Comma)
        });
        assert!(result.is_err());
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_alternative_first_match_wins() {
        let mut s = Scanner::new("le II");
        let result = alternative(&mut s, "anything", &[never, any_word]);
        assert!(result.is_ok());
        assert_eq!(s.offset(), 3);
    }

    #[test]
    fn test_alternative_reports_deepest_mismatch() {
        fn two_words<'a>(s: &mut Scanner<'a>) -> PResult<()> {
            s.eat(TokenKind::Word)?;
            s.eat(TokenKind::Word).map(|_| ())
        }
        let mut s = Scanner::new("le ,");
        let err = alternative(&mut s, "anything", &[never, two_words]).unwrap_err();
        assert_eq!(err.at, 3);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_repeat_enforces_minimum() {
        let mut s = Scanner::new("le la ,");
        let words = repeat(&mut s, 1, any_word).unwrap();
        assert_eq!(words.len(), 2);

        let err = repeat(&mut s, 1, any_word);
        assert!(err.is_err());
        assert_eq!(s.peek(), TokenKind::Comma);
    }
}
