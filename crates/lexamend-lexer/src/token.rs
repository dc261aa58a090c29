//! Token definitions for amendment prose

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip "[ \\t\\r\\n\u{a0}\u{202f}]+")] // Skip whitespace, incl. French non-breaking spaces
pub enum TokenKind {
    /// A run of letters, hyphenated compounds included:
    /// "alinéa", "avant-dernier", "sous-section"
    #[regex("[A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{ff}\u{152}\u{153}]+(?:-[A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{ff}\u{152}\u{153}]+)*")]
    Word,

    /// A numeral, hyphenated compounds included: "224", "112-3", "86-1067"
    #[regex("[0-9]+(?:-[0-9]+)*")]
    Number,

    /// A numeral with an ordinal suffix: "1er", "2e", "3ème"
    #[regex("[0-9]+(?:ère|ème|er|re|e)")]
    OrdinalNumber,

    // === Quotation marks ===
    #[token("«")]
    #[token("“")]
    OpenQuote,

    #[token("»")]
    #[token("”")]
    CloseQuote,

    #[token("\"")]
    StraightQuote,

    #[token("'")]
    #[token("’")]
    Apostrophe,

    // === Punctuation ===
    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token(".")]
    Period,

    #[token("°")]
    Degree,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("-")]
    #[token("–")]
    #[token("—")]
    Dash,

    /// Anything the grammar has no use for
    Error,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Human-readable description for error messages
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Word => "a word",
            TokenKind::Number => "a number",
            TokenKind::OrdinalNumber => "an ordinal number",
            TokenKind::OpenQuote => "an opening quotation mark",
            TokenKind::CloseQuote => "a closing quotation mark",
            TokenKind::StraightQuote => "a straight quote",
            TokenKind::Apostrophe => "an apostrophe",
            TokenKind::Comma => "a comma",
            TokenKind::Semicolon => "a semicolon",
            TokenKind::Colon => "a colon",
            TokenKind::Period => "a period",
            TokenKind::Degree => "a degree sign",
            TokenKind::LParen => "an opening parenthesis",
            TokenKind::RParen => "a closing parenthesis",
            TokenKind::Dash => "a dash",
            TokenKind::Error => "an unrecognized character",
            TokenKind::Eof => "end of input",
        }
    }
}
