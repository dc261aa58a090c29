//! Lexamend Lexer - Tokenization using logos
//!
//! Handles the typographic quirks of published French legal texts:
//! - guillemets (« ») and curly quotes delimit citations
//! - non-breaking spaces (U+00A0, U+202F) pad punctuation and are skipped
//! - elisions split into a word and an apostrophe ("l'article")
//! - hyphenated numbers ("112-3") and compounds ("avant-dernier") stay
//!   single tokens

mod normalize;
mod token;

pub use normalize::*;
pub use token::*;

use lexamend_ast::Span;
use logos::Logos;

/// Tokenize a source string into a vector of tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::new(lexer.span().start, lexer.span().end);
        let kind = match result {
            Ok(kind) => kind,
            Err(_) => TokenKind::Error,
        };
        tokens.push(Token { kind, span });
    }

    // Add EOF token
    let end = source.len();
    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::new(end, end),
    });

    tokens
}

/// A token with its span
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_fragment() {
        let source = "du dernier alinéa du II";
        let tokens = tokenize(source);
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[2].text(source), "alinéa");
        assert_eq!(tokens[4].text(source), "II");
    }

    #[test]
    fn test_elision_and_item_marker() {
        let source = "de l'article 224 et du 1°";
        let tokens = tokenize(source);
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Apostrophe,
                TokenKind::Word,
                TokenKind::Number,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Number,
                TokenKind::Degree,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_guillemets_skip_non_breaking_spaces() {
        let source = "«\u{a0}il est sursis\u{a0}»";
        let tokens = tokenize(source);
        assert_eq!(tokens[0].kind, TokenKind::OpenQuote);
        assert_eq!(tokens[1].text(source), "il");
        assert_eq!(tokens[4].kind, TokenKind::CloseQuote);
        assert_eq!(tokens[5].kind, TokenKind::Eof);
    }

    #[test]
    fn test_hyphenated_number_and_ordinal() {
        let source = "L. 112-3 et le 1er";
        let tokens = tokenize(source);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Period);
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[2].text(source), "112-3");
        assert_eq!(tokens[5].kind, TokenKind::OrdinalNumber);
        assert_eq!(tokens[5].text(source), "1er");
    }

    #[test]
    fn test_unrecognized_character_becomes_error_token() {
        let tokens = tokenize("le § 2");
        assert_eq!(tokens[1].kind, TokenKind::Error);
    }

    #[test]
    fn test_eof_span_sits_at_end() {
        let source = "le II";
        let tokens = tokenize(source);
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.span, Span::new(source.len(), source.len()));
    }
}
