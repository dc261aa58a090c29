//! Token cursor with checkpoint/rewind
//!
//! Wraps the lexer's token stream behind a cursor the grammar can save and
//! restore. A checkpoint is a token index, so backtracking never
//! re-tokenizes.

use lexamend_ast::Span;
use lexamend_lexer::{inflected_eq, keyword_eq, tokenize, Token, TokenKind};

use crate::combinators::{Mismatch, PResult};

/// Mismatch description reserved for a quotation that never closes; the
/// sentence entry points surface it as its own error variant
pub(crate) const UNBALANCED_QUOTE: &str = "a closing quotation mark";

/// A saved cursor position
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint(usize);

/// Cursor over the tokens of one sentence
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: tokenize(source),
            pos: 0,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The token under the cursor. Tokenization always appends `Eof`,
    /// so there is always one.
    pub fn current(&self) -> Token {
        self.tokens[self.pos]
    }

    pub fn peek(&self) -> TokenKind {
        self.current().kind
    }

    /// The kind of the token `n` positions ahead (0 = current)
    pub fn peek_ahead(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    /// Consume and return the current token. At end of input this keeps
    /// returning `Eof` without moving.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    pub fn at_eof(&self) -> bool {
        self.at(TokenKind::Eof)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }

    /// Byte offset of the next unconsumed token (end of source at `Eof`)
    pub fn offset(&self) -> usize {
        self.current().span.start
    }

    /// Byte offset just after the last consumed token
    pub fn prev_end(&self) -> usize {
        if self.pos == 0 {
            0
        } else {
            self.tokens[self.pos - 1].span.end
        }
    }

    /// The source not yet consumed
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset()..]
    }

    pub fn text(&self, token: Token) -> &'a str {
        token.text(self.source)
    }

    pub fn slice(&self, span: Span) -> &'a str {
        span.text(self.source)
    }

    pub fn eat(&mut self, kind: TokenKind) -> PResult<Token> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(Mismatch::new(kind.describe(), self.offset()))
        }
    }

    /// Text of the current token if it is a word
    pub fn word(&self) -> Option<&'a str> {
        if self.at(TokenKind::Word) {
            Some(self.text(self.current()))
        } else {
            None
        }
    }

    /// Text of the token `n` positions ahead, if that token is a word
    pub fn word_ahead(&self, n: usize) -> Option<&'a str> {
        let token = self.tokens.get(self.pos + n)?;
        if token.kind == TokenKind::Word {
            Some(token.text(self.source))
        } else {
            None
        }
    }

    /// Whether the current token is `keyword` up to case and diacritics
    pub fn at_keyword(&self, keyword: &str) -> bool {
        self.word().map(|w| keyword_eq(w, keyword)).unwrap_or(false)
    }

    pub fn eat_keyword(&mut self, keyword: &'static str) -> PResult<Token> {
        if self.at_keyword(keyword) {
            Ok(self.advance())
        } else {
            Err(Mismatch::new(keyword, self.offset()))
        }
    }

    /// Whether the current token matches `stem` up to agreement endings
    pub fn at_inflected(&self, stem: &str) -> bool {
        self.word().map(|w| inflected_eq(w, stem)).unwrap_or(false)
    }

    pub fn eat_inflected(&mut self, stem: &'static str) -> PResult<Token> {
        if self.at_inflected(stem) {
            Ok(self.advance())
        } else {
            Err(Mismatch::new(stem, self.offset()))
        }
    }

    /// Consume a balanced quotation (« … », “ … ” or "…") and return the
    /// trimmed inner text plus the span including delimiters. Restores the
    /// cursor when the quotation never closes.
    pub fn eat_quotation(&mut self) -> PResult<(String, Span)> {
        let entry = self.checkpoint();
        let opener = match self.peek() {
            TokenKind::OpenQuote | TokenKind::StraightQuote => self.advance(),
            _ => {
                return Err(Mismatch::new(
                    "an opening quotation mark",
                    self.offset(),
                ))
            }
        };
        let closer = match opener.kind {
            TokenKind::OpenQuote => TokenKind::CloseQuote,
            _ => TokenKind::StraightQuote,
        };
        loop {
            if self.at(closer) {
                let close = self.advance();
                let inner = self.source[opener.span.end..close.span.start].trim();
                return Ok((
                    inner.to_string(),
                    Span::new(opener.span.start, close.span.end),
                ));
            }
            if self.at_eof() {
                let at = opener.span.start;
                self.rewind(entry);
                return Err(Mismatch::new(UNBALANCED_QUOTE, at));
            }
            self.advance();
        }
    }
}
