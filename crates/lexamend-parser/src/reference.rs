//! Recursive-descent grammar for legal citations
//!
//! Parses the reference half of an amendment sentence: which fragment of
//! which text the amendment touches. Alternatives are ordered most specific
//! first, so "le dernier alinéa" reads as a portion before "dernier" could
//! be mistaken for a marker. Composition climbs through the genitive
//! connectives ("du", "de la", "de l'"), always putting the coarser unit in
//! the parent position whatever the surface word order.

use lexamend_ast::{DivisionKind, IntervalEnd, PortionUnit, Reference, ReferenceKind, Span};
use lexamend_lexer::{fold, is_latin_suffix, keyword_eq, TokenKind};

use crate::combinators::{alternative, attempt, optional, repeat, Mismatch, PResult};
use crate::scan::Scanner;

/// Nouns that open a named text reference
const TEXT_NOUNS: &[&str] = &["code", "loi", "ordonnance"];

/// Folded words that terminate a greedy text-name capture
const NAME_STOP_WORDS: &[&str] = &[
    "est",
    "sont",
    "devient",
    "deviennent",
    "demeure",
    "demeurent",
];

const MONTHS: &[&str] = &[
    "janvier",
    "fevrier",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "aout",
    "septembre",
    "octobre",
    "novembre",
    "decembre",
];

const ORDINAL_WORDS: &[(&str, i64)] = &[
    ("premier", 1),
    ("second", 2),
    ("deuxieme", 2),
    ("troisieme", 3),
    ("quatrieme", 4),
    ("cinquieme", 5),
    ("sixieme", 6),
    ("septieme", 7),
    ("huitieme", 8),
    ("neuvieme", 9),
    ("dixieme", 10),
    ("onzieme", 11),
    ("douzieme", 12),
    ("avant-dernier", -2),
    ("dernier", -1),
];

const CARDINAL_WORDS: &[(&str, u32)] = &[
    ("deux", 2),
    ("trois", 3),
    ("quatre", 4),
    ("cinq", 5),
    ("six", 6),
    ("sept", 7),
    ("huit", 8),
    ("neuf", 9),
    ("dix", 10),
    ("onze", 11),
    ("douze", 12),
];

/// Parse one complete reference, including any leading connective,
/// sibling enumeration, and the locative comma form
/// ("Au premier alinéa, les mots : « … »").
pub fn parse_reference<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    attempt(s, |s| {
        let start = s.offset();
        let locative = optional(s, parse_leading_connective).unwrap_or(false);
        let first = parse_chain(s)?;

        // sibling enumeration: "le 1° et le 2°", "les I, II et III".
        // After a locative lead the comma narrows instead of enumerating,
        // so it is not a separator there.
        let mut members = vec![first];
        members.extend(repeat(s, 0, |s| {
            eat_chain_separator(s, !locative)?;
            let _ = optional(s, parse_leading_connective);
            parse_chain(s)
        })?);

        let mut reference = if members.len() == 1 {
            members.swap_remove(0)
        } else {
            let span = Span::new(start, s.prev_end());
            Reference::new(ReferenceKind::Enumeration(members), span)
        };

        // "Au premier alinéa, les mots : « X »": the comma-separated part
        // is contained in the locative scope
        if locative {
            if let Some(child) = optional(s, |s| {
                s.eat(TokenKind::Comma)?;
                let _ = optional(s, parse_leading_connective);
                parse_chain(s)
            }) {
                let span = Span::new(start, child.span.end);
                reference = Reference::new(
                    ReferenceKind::ParentChild {
                        parent: Box::new(reference),
                        child: Box::new(child),
                    },
                    span,
                );
            }
        }

        reference.span = Span::new(start, reference.span.end);
        Ok(reference)
    })
}

/// A connective in front of the first atom. Returns whether it was locative
/// (the à/dans family), which changes how a following comma binds.
fn parse_leading_connective<'a>(s: &mut Scanner<'a>) -> PResult<bool> {
    let word = match s.word() {
        Some(word) => word,
        None => return Err(Mismatch::new("a connective", s.offset())),
    };
    let locative = match fold(word).as_str() {
        "au" | "aux" | "dans" | "audit" | "auxdits" | "auxdites" => true,
        "a" => {
            // a bare "a"/"A" is only the preposition when accented or when a
            // determiner follows ("A la seconde phrase" in unaccented texts);
            // otherwise it is a lettered marker
            let accented = word == "à" || word == "À";
            let determined = matches!(
                s.word_ahead(1).map(|w| fold(w)).as_deref(),
                Some("le" | "la" | "les" | "l")
            );
            if accented || determined {
                true
            } else {
                return Err(Mismatch::new("a connective", s.offset()));
            }
        }
        "du" | "de" | "des" | "dudit" | "desdits" | "desdites" => false,
        _ => return Err(Mismatch::new("a connective", s.offset())),
    };
    s.advance();
    Ok(locative)
}

/// Separator between enumerated sibling references
fn eat_chain_separator<'a>(s: &mut Scanner<'a>, allow_comma: bool) -> PResult<()> {
    if allow_comma && s.at(TokenKind::Comma) {
        s.advance();
        if s.at_keyword("et") {
            s.advance();
        }
        return Ok(());
    }
    if s.at_keyword("et") {
        s.advance();
        return Ok(());
    }
    if s.at_keyword("ainsi") && s.word_ahead(1).map(|w| fold(w)).as_deref() == Some("que") {
        s.advance();
        s.advance();
        return Ok(());
    }
    Err(Mismatch::new("an enumeration separator", s.offset()))
}

/// One atom, possibly composed upward through genitives:
/// "alinéa du II de l'article 224"
fn parse_chain<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    let child = parse_atom(s)?;
    match attempt(s, |s| {
        eat_genitive(s)?;
        parse_chain(s)
    }) {
        Ok(parent) => {
            let span = child.span.merge(parent.span);
            Ok(Reference::new(
                ReferenceKind::ParentChild {
                    parent: Box::new(parent),
                    child: Box::new(child),
                },
                span,
            ))
        }
        Err(_) => Ok(child),
    }
}

/// The genitive connectives that climb to a coarser parent
fn eat_genitive<'a>(s: &mut Scanner<'a>) -> PResult<()> {
    let word = match s.word() {
        Some(word) => word,
        None => return Err(Mismatch::new("a genitive connective", s.offset())),
    };
    match fold(word).as_str() {
        "du" | "de" | "des" | "dudit" | "desdits" | "desdites" => {
            s.advance();
            Ok(())
        }
        _ => Err(Mismatch::new("a genitive connective", s.offset())),
    }
}

/// One reference atom with its optional determiner, most specific first
fn parse_atom<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    attempt(s, |s| {
        let start = s.offset();
        eat_determiner(s);
        let mut reference = alternative(
            s,
            "a reference",
            &[
                parse_portion_group,
                parse_division_group,
                parse_article,
                parse_words,
                parse_text,
                parse_marker_group,
            ],
        )?;
        reference.span = Span::new(start, reference.span.end);
        Ok(reference)
    })
}

/// Definite determiners, including elided ("l'") and fused anaphoric forms
/// ("ledit", "ladite")
fn eat_determiner(s: &mut Scanner) {
    if let Some(word) = s.word() {
        match fold(word).as_str() {
            "le" | "la" | "les" | "ledit" | "ladite" | "lesdits" | "lesdites" => {
                s.advance();
            }
            "l" if s.peek_ahead(1) == TokenKind::Apostrophe => {
                s.advance();
                s.advance();
            }
            _ => {}
        }
    }
}

// === Portions (alinéas and phrases) ===

fn parse_portion_group<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    alternative(
        s,
        "a portion reference",
        &[
            parse_counted_portions,
            parse_ordinal_portions,
            parse_numbered_portions,
        ],
    )
}

/// Counted run: "les trois derniers alinéas", "les deux premières phrases"
fn parse_counted_portions<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    let start = s.offset();
    let count = parse_cardinal(s)?;
    let from_end = if s.at_inflected("dernier") {
        true
    } else if s.at_inflected("premier") {
        false
    } else {
        return Err(Mismatch::new("'premiers' or 'derniers'", s.offset()));
    };
    s.advance();
    let unit = parse_portion_unit(s)?;
    let span = Span::new(start, s.prev_end());
    let first_ordinal = if from_end { -(count as i64) } else { 1 };
    Ok(Reference::new(
        ReferenceKind::Interval {
            first: Box::new(Reference::new(
                ReferenceKind::Portion {
                    unit,
                    ordinal: first_ordinal,
                },
                span,
            )),
            end: IntervalEnd::Counted(count),
        },
        span,
    ))
}

/// Symbolic ordinals: "la seconde phrase", "les premier et second alinéas",
/// "du deuxième au quatrième alinéa"
fn parse_ordinal_portions<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    let start = s.offset();
    let first = parse_ordinal_word(s)?;

    // bounded interval: "du deuxième au quatrième alinéa"
    if let Some(last) = optional(s, |s| {
        eat_interval_separator(s)?;
        eat_determiner(s);
        parse_ordinal_word(s)
    }) {
        let unit = parse_portion_unit(s)?;
        let span = Span::new(start, s.prev_end());
        return Ok(Reference::new(
            ReferenceKind::Interval {
                first: Box::new(Reference::new(
                    ReferenceKind::Portion {
                        unit,
                        ordinal: first.0,
                    },
                    Span::new(start, first.1.end),
                )),
                end: IntervalEnd::Bounded(Box::new(Reference::new(
                    ReferenceKind::Portion {
                        unit,
                        ordinal: last.0,
                    },
                    Span::new(last.1.start, s.prev_end()),
                ))),
            },
            span,
        ));
    }

    // elliptical list sharing one noun: "les premier et second alinéas"
    let mut ordinals = vec![first];
    ordinals.extend(repeat(s, 0, |s| {
        eat_list_separator(s)?;
        eat_determiner(s);
        parse_ordinal_word(s)
    })?);

    let unit = parse_portion_unit(s)?;
    let end = s.prev_end();

    if ordinals.len() == 1 {
        let (ordinal, _) = ordinals[0];
        return Ok(Reference::new(
            ReferenceKind::Portion { unit, ordinal },
            Span::new(start, end),
        ));
    }
    let members = ordinals
        .into_iter()
        .map(|(ordinal, span)| {
            Reference::new(
                ReferenceKind::Portion { unit, ordinal },
                Span::new(span.start, end),
            )
        })
        .collect();
    Ok(Reference::new(
        ReferenceKind::Enumeration(members),
        Span::new(start, end),
    ))
}

/// Noun-first numbering: "l'alinéa 2", "les alinéas 2 et 3"
fn parse_numbered_portions<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    let start = s.offset();
    let unit = parse_portion_unit(s)?;
    let first = parse_number_value(s)?;
    let mut values = vec![first];
    values.extend(repeat(s, 0, |s| {
        eat_list_separator(s)?;
        parse_number_value(s)
    })?);

    let end = s.prev_end();
    if values.len() == 1 {
        let (ordinal, _) = values[0];
        return Ok(Reference::new(
            ReferenceKind::Portion { unit, ordinal },
            Span::new(start, end),
        ));
    }
    let members = values
        .into_iter()
        .map(|(ordinal, span)| Reference::new(ReferenceKind::Portion { unit, ordinal }, span))
        .collect();
    Ok(Reference::new(
        ReferenceKind::Enumeration(members),
        Span::new(start, end),
    ))
}

/// "alinéa" or "phrase", with agreement endings
fn parse_portion_unit<'a>(s: &mut Scanner<'a>) -> PResult<PortionUnit> {
    if s.at_inflected("alinea") {
        s.advance();
        return Ok(PortionUnit::Paragraph);
    }
    if s.at_inflected("phrase") {
        s.advance();
        return Ok(PortionUnit::Sentence);
    }
    Err(Mismatch::new("'alinéa' or 'phrase'", s.offset()))
}

/// A symbolic or numeric ordinal: "second", "dernière", "avant-dernier",
/// "2e". Negative values count from the end.
fn parse_ordinal_word<'a>(s: &mut Scanner<'a>) -> PResult<(i64, Span)> {
    if let Some(word) = s.word() {
        for (stem, value) in ORDINAL_WORDS {
            if lexamend_lexer::inflected_eq(word, stem) {
                let token = s.advance();
                return Ok((*value, token.span));
            }
        }
    }
    if s.at(TokenKind::OrdinalNumber) {
        let text = s.text(s.current());
        let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
        if let Ok(value) = digits.parse::<i64>() {
            let token = s.advance();
            return Ok((value, token.span));
        }
    }
    Err(Mismatch::new("an ordinal", s.offset()))
}

/// A small count: "deux", "trois", or a numeral
fn parse_cardinal<'a>(s: &mut Scanner<'a>) -> PResult<u32> {
    if let Some(word) = s.word() {
        for (name, value) in CARDINAL_WORDS {
            if keyword_eq(word, name) {
                s.advance();
                return Ok(*value);
            }
        }
    }
    if s.at(TokenKind::Number) {
        let text = s.text(s.current());
        if let Ok(value) = text.parse::<u32>() {
            s.advance();
            return Ok(value);
        }
    }
    Err(Mismatch::new("a count", s.offset()))
}

/// A plain numeral used as an ordinal ("l'alinéa 2")
fn parse_number_value<'a>(s: &mut Scanner<'a>) -> PResult<(i64, Span)> {
    if s.at(TokenKind::Number) {
        let text = s.text(s.current());
        if let Ok(value) = text.parse::<i64>() {
            let token = s.advance();
            return Ok((value, token.span));
        }
    }
    Err(Mismatch::new("a number", s.offset()))
}

/// "à"/"au" between interval bounds. A bare unaccented "a" never separates
/// bounds; it reads as a lettered marker.
fn eat_interval_separator<'a>(s: &mut Scanner<'a>) -> PResult<()> {
    if let Some(word) = s.word() {
        if word == "à" || word == "À" || matches!(fold(word).as_str(), "au" | "aux") {
            s.advance();
            return Ok(());
        }
    }
    Err(Mismatch::new("'à'", s.offset()))
}

/// "," or "et" inside an elliptical member list
fn eat_list_separator<'a>(s: &mut Scanner<'a>) -> PResult<()> {
    if s.at(TokenKind::Comma) {
        s.advance();
        if s.at_keyword("et") {
            s.advance();
        }
        return Ok(());
    }
    if s.at_keyword("et") {
        s.advance();
        return Ok(());
    }
    Err(Mismatch::new("',' or 'et'", s.offset()))
}

// === Divisions with an explicit kind noun ===

/// "le chapitre III", "la section 2", "la deuxième section"
fn parse_division_group<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    let start = s.offset();
    if s.at_inflected("meme") {
        s.advance();
    }

    // ordinal-indexed: "la deuxième section"
    if let Some((kind, index)) = optional(s, |s| {
        let (ordinal, _) = parse_ordinal_word(s)?;
        let kind = parse_division_noun(s)?;
        Ok((kind, ordinal))
    }) {
        return Ok(Reference::new(
            ReferenceKind::Division {
                kind,
                marker: None,
                index: Some(index),
            },
            Span::new(start, s.prev_end()),
        ));
    }

    let kind = parse_division_noun(s)?;
    let marker = parse_marker_text(s)?;
    Ok(Reference::new(
        ReferenceKind::Division {
            kind,
            marker: Some(marker),
            index: None,
        },
        Span::new(start, s.prev_end()),
    ))
}

/// The noun naming a division kind: "chapitre", "sous-section", ...
fn parse_division_noun<'a>(s: &mut Scanner<'a>) -> PResult<DivisionKind> {
    if let Some(word) = s.word() {
        for kind in DivisionKind::ALL {
            if let Some(noun) = kind.french_noun() {
                if lexamend_lexer::inflected_eq(word, noun) {
                    s.advance();
                    return Ok(kind);
                }
            }
        }
    }
    Err(Mismatch::new("a division noun", s.offset()))
}

/// The marker following a division noun: "III", "Ier", "2", "1er",
/// "préliminaire", optionally extended by latin suffixes ("III bis")
fn parse_marker_text<'a>(s: &mut Scanner<'a>) -> PResult<String> {
    let token = s.current();
    let accepted = match token.kind {
        TokenKind::Number | TokenKind::OrdinalNumber => true,
        TokenKind::Word => {
            let word = s.text(token);
            is_roman(word)
                || (word.chars().count() == 1 && word.chars().all(|c| c.is_ascii_alphabetic()))
                || matches!(fold(word).as_str(), "ier" | "preliminaire" | "unique")
        }
        _ => false,
    };
    if !accepted {
        return Err(Mismatch::new("a division marker", s.offset()));
    }
    let start = token.span.start;
    s.advance();
    eat_marker_suffixes(s);
    Ok(s.slice(Span::new(start, s.prev_end())).to_string())
}

/// Trailing latin suffixes: "bis", "ter", ...
fn eat_marker_suffixes(s: &mut Scanner) {
    while let Some(word) = s.word() {
        if is_latin_suffix(word) {
            s.advance();
        } else {
            break;
        }
    }
}

/// Uppercase roman numeral check
fn is_roman(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| "IVXLCDM".contains(c))
}

// === Articles ===

/// "l'article 224", "l'article L. 112-3", "les articles 3 à 5",
/// "du même article", "l'article suivant"
fn parse_article<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    let start = s.offset();

    // anaphoric: "du même article", "au présent article"
    if let Some(span) = optional(s, |s| {
        if s.at_keyword("meme") || s.at_inflected("present") {
            s.advance();
        } else {
            return Err(Mismatch::new("'même' or 'présent'", s.offset()));
        }
        s.eat_inflected("article")?;
        Ok(Span::new(start, s.prev_end()))
    }) {
        return Ok(Reference::new(
            ReferenceKind::Article {
                number: None,
                offset: 0,
            },
            span,
        ));
    }

    s.eat_inflected("article")?;

    if s.at_inflected("suivant") {
        s.advance();
        return Ok(Reference::new(
            ReferenceKind::Article {
                number: None,
                offset: 1,
            },
            Span::new(start, s.prev_end()),
        ));
    }
    if s.at_inflected("precedent") {
        s.advance();
        return Ok(Reference::new(
            ReferenceKind::Article {
                number: None,
                offset: -1,
            },
            Span::new(start, s.prev_end()),
        ));
    }

    let first = match optional(s, parse_article_number) {
        Some(number) => number,
        // bare "l'article": the enclosing sentence names it
        None => {
            return Ok(Reference::new(
                ReferenceKind::Article {
                    number: None,
                    offset: 0,
                },
                Span::new(start, s.prev_end()),
            ))
        }
    };

    // interval: "les articles 3 à 5"
    if let Some(last) = optional(s, |s| {
        eat_interval_separator(s)?;
        parse_article_number(s)
    }) {
        let span = Span::new(start, s.prev_end());
        return Ok(Reference::new(
            ReferenceKind::Interval {
                first: Box::new(article_ref((first.0, Span::new(start, first.1.end)))),
                end: IntervalEnd::Bounded(Box::new(article_ref(last))),
            },
            span,
        ));
    }

    // enumeration: "les articles 3 et 4"
    let mut numbers = vec![(first.0, Span::new(start, first.1.end))];
    numbers.extend(repeat(s, 0, |s| {
        eat_list_separator(s)?;
        parse_article_number(s)
    })?);

    if numbers.len() == 1 {
        let only = numbers.swap_remove(0);
        return Ok(article_ref(only));
    }
    let span = Span::new(start, s.prev_end());
    let members = numbers.into_iter().map(article_ref).collect();
    Ok(Reference::new(ReferenceKind::Enumeration(members), span))
}

fn article_ref((number, span): (String, Span)) -> Reference {
    Reference::new(
        ReferenceKind::Article {
            number: Some(number),
            offset: 0,
        },
        span,
    )
}

/// An article number: "224", "224 bis", "L. 112-3", "1er"
fn parse_article_number<'a>(s: &mut Scanner<'a>) -> PResult<(String, Span)> {
    attempt(s, |s| {
        let start = s.offset();
        // codified prefix: "L. 112-3", "R. 224-1", "D. 45"
        if let Some(word) = s.word() {
            if matches!(word, "L" | "R" | "D") {
                s.advance();
                if s.at(TokenKind::Period) {
                    s.advance();
                }
            }
        }
        match s.peek() {
            TokenKind::Number | TokenKind::OrdinalNumber => {
                s.advance();
            }
            _ => return Err(Mismatch::new("an article number", s.offset())),
        }
        eat_marker_suffixes(s);
        let span = Span::new(start, s.prev_end());
        Ok((s.slice(span).to_string(), span))
    })
}

// === Quoted words ===

/// "les mots : « il est sursis »", "le mot « autorité »"
fn parse_words<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    let start = s.offset();
    s.eat_inflected("mot")?;
    if s.at(TokenKind::Colon) {
        s.advance();
    }
    let (text, quote_span) = s.eat_quotation()?;
    Ok(Reference::new(
        ReferenceKind::Words { text },
        Span::new(start, quote_span.end),
    ))
}

// === Whole texts ===

fn parse_text<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    alternative(
        s,
        "a text reference",
        &[parse_anaphoric_scope, parse_named_text],
    )
}

/// "le présent code", "la même loi", "du présent chapitre": anaphora back
/// to the enclosing text, whatever noun carries it
fn parse_anaphoric_scope<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    let start = s.offset();
    match s.word().map(|w| fold(w)).as_deref() {
        Some("present" | "presente" | "presents" | "presentes" | "meme" | "memes") => {
            s.advance();
        }
        _ => return Err(Mismatch::new("'présent' or 'même'", s.offset())),
    }
    let noun = match s.word() {
        Some(word) => word,
        None => return Err(Mismatch::new("a scope noun", s.offset())),
    };
    if !is_scope_noun(noun) {
        return Err(Mismatch::new("a scope noun", s.offset()));
    }
    s.advance();
    Ok(Reference::new(
        ReferenceKind::Text { id: None },
        Span::new(start, s.prev_end()),
    ))
}

fn is_scope_noun(word: &str) -> bool {
    TEXT_NOUNS.iter().any(|n| lexamend_lexer::inflected_eq(word, n))
        || DivisionKind::ALL.iter().any(|kind| {
            kind.french_noun()
                .map(|n| lexamend_lexer::inflected_eq(word, n))
                .unwrap_or(false)
        })
        || lexamend_lexer::inflected_eq(word, "alinea")
        || lexamend_lexer::inflected_eq(word, "phrase")
}

/// A named code or statute. A bare noun ("ladite loi") is anaphoric and
/// carries no id.
fn parse_named_text<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    let start = s.offset();
    let noun = match s.word() {
        Some(word) => word,
        None => {
            return Err(Mismatch::new(
                "'code', 'loi' or 'ordonnance'",
                s.offset(),
            ))
        }
    };
    if lexamend_lexer::inflected_eq(noun, "code") {
        s.advance();
        return Ok(finish_code_name(s, start));
    }
    if lexamend_lexer::inflected_eq(noun, "loi")
        || lexamend_lexer::inflected_eq(noun, "ordonnance")
    {
        s.advance();
        return Ok(finish_statute_name(s, start));
    }
    Err(Mismatch::new("'code', 'loi' or 'ordonnance'", s.offset()))
}

/// Greedily take the descriptive words of a code name: "général des
/// impôts", "de la sécurité sociale". Stops before verbs, and before "et"
/// when "et" introduces a new reference rather than continuing the name.
fn finish_code_name(s: &mut Scanner, start: usize) -> Reference {
    let noun_end = s.prev_end();
    let mut end = noun_end;
    loop {
        match s.peek() {
            TokenKind::Word => {
                let word = match s.word() {
                    Some(word) => word,
                    None => break,
                };
                let folded = fold(word);
                if NAME_STOP_WORDS.contains(&folded.as_str()) {
                    break;
                }
                if folded == "et" && et_breaks_name(s) {
                    break;
                }
                end = s.advance().span.end;
            }
            TokenKind::Apostrophe => {
                end = s.advance().span.end;
            }
            _ => break,
        }
    }
    let id = if end == noun_end {
        None
    } else {
        Some(s.slice(Span::new(start, end)).to_string())
    };
    Reference::new(ReferenceKind::Text { id }, Span::new(start, end))
}

/// "loi n° 86-1067 du 30 septembre 1986 relative à …": the number and date
/// pin the identity; descriptive words then join the captured name.
fn finish_statute_name(s: &mut Scanner, start: usize) -> Reference {
    if s.at_keyword("organique") {
        s.advance();
    }
    let mut named = false;

    // "n° 86-1067"
    if s.at_keyword("n") && s.peek_ahead(1) == TokenKind::Degree {
        let entry = s.checkpoint();
        s.advance();
        s.advance();
        if s.at(TokenKind::Number) {
            s.advance();
            named = true;
        } else {
            s.rewind(entry);
        }
    }

    // "du 30 septembre 1986"
    if optional(s, eat_date).is_some() {
        named = true;
    }

    // descriptive tail: "relative à la liberté de communication"
    if named {
        loop {
            match s.peek() {
                TokenKind::Word => {
                    let word = match s.word() {
                        Some(word) => word,
                        None => break,
                    };
                    let folded = fold(word);
                    if NAME_STOP_WORDS.contains(&folded.as_str()) {
                        break;
                    }
                    if folded == "et" && et_breaks_name(s) {
                        break;
                    }
                    s.advance();
                }
                TokenKind::Apostrophe | TokenKind::Number => {
                    s.advance();
                }
                _ => break,
            }
        }
    }

    let end = s.prev_end();
    let id = if named {
        Some(s.slice(Span::new(start, end)).to_string())
    } else {
        None
    };
    Reference::new(ReferenceKind::Text { id }, Span::new(start, end))
}

/// Whether "et" under the cursor starts a new reference instead of
/// continuing a text name ("et de l'article 4" vs "et des familles")
fn et_breaks_name(s: &Scanner) -> bool {
    let next = s.word_ahead(1).map(|w| fold(w));
    match next.as_deref() {
        Some("le" | "la" | "les" | "l" | "ledit" | "ladite" | "lesdits" | "lesdites") => true,
        Some("de" | "du" | "des" | "d" | "au" | "aux" | "a") => {
            match s.word_ahead(2).map(|w| fold(w)).as_deref() {
                Some("le" | "la" | "les" | "l") => true,
                Some(noun) => is_reference_noun(noun),
                None => false,
            }
        }
        Some(noun) => is_reference_noun(noun),
        None => false,
    }
}

fn is_reference_noun(word: &str) -> bool {
    lexamend_lexer::inflected_eq(word, "article")
        || lexamend_lexer::inflected_eq(word, "alinea")
        || lexamend_lexer::inflected_eq(word, "phrase")
        || lexamend_lexer::inflected_eq(word, "mot")
        || is_scope_noun(word)
}

/// "du 30 septembre 1986": day, month name, year
fn eat_date<'a>(s: &mut Scanner<'a>) -> PResult<usize> {
    s.eat_keyword("du")?;
    match s.peek() {
        TokenKind::Number | TokenKind::OrdinalNumber => {
            s.advance();
        }
        _ => return Err(Mismatch::new("a day number", s.offset())),
    }
    let month = match s.word() {
        Some(word) => word,
        None => return Err(Mismatch::new("a month name", s.offset())),
    };
    if !MONTHS.iter().any(|m| keyword_eq(month, m)) {
        return Err(Mismatch::new("a month name", s.offset()));
    }
    s.advance();
    let year = s.eat(TokenKind::Number)?;
    Ok(year.span.end)
}

// === Bare item markers ===

/// "le II", "le 1°", "les a et b", "les 1° à 4°", "le III bis"
fn parse_marker_group<'a>(s: &mut Scanner<'a>) -> PResult<Reference> {
    let start = s.offset();
    if s.at_inflected("meme") {
        s.advance();
    }
    let first = parse_bare_marker(s)?;

    // interval: "les 1° à 4°"
    if let Some(last) = optional(s, |s| {
        eat_interval_separator(s)?;
        parse_bare_marker(s)
    }) {
        let span = Span::new(start, s.prev_end());
        return Ok(Reference::new(
            ReferenceKind::Interval {
                first: Box::new(division_item(first)),
                end: IntervalEnd::Bounded(Box::new(division_item(last))),
            },
            span,
        ));
    }

    // elliptical list: "les a et b", "les 1°, 3° et 4°"
    let mut markers = vec![first];
    markers.extend(repeat(s, 0, |s| {
        eat_list_separator(s)?;
        parse_bare_marker(s)
    })?);

    if markers.len() == 1 {
        let only = markers.swap_remove(0);
        return Ok(division_item(only));
    }
    let span = Span::new(start, s.prev_end());
    let members = markers.into_iter().map(division_item).collect();
    Ok(Reference::new(ReferenceKind::Enumeration(members), span))
}

fn division_item((marker, span): (String, Span)) -> Reference {
    Reference::new(
        ReferenceKind::Division {
            kind: DivisionKind::Item,
            marker: Some(marker),
            index: None,
        },
        span,
    )
}

/// One bare marker: a roman numeral ("II"), a single letter ("a"), or an
/// arabic item ("1°"), with optional latin suffixes
fn parse_bare_marker<'a>(s: &mut Scanner<'a>) -> PResult<(String, Span)> {
    let token = s.current();
    let start = token.span.start;
    match token.kind {
        TokenKind::Word => {
            let word = s.text(token);
            let single_letter =
                word.chars().count() == 1 && word.chars().all(|c| c.is_ascii_alphabetic());
            if !is_roman(word) && !single_letter {
                return Err(Mismatch::new("an item marker", s.offset()));
            }
            s.advance();
        }
        TokenKind::Number if s.peek_ahead(1) == TokenKind::Degree => {
            s.advance();
            s.advance();
        }
        _ => return Err(Mismatch::new("an item marker", s.offset())),
    }
    eat_marker_suffixes(s);
    let span = Span::new(start, s.prev_end());
    Ok((s.slice(span).to_string(), span))
}
