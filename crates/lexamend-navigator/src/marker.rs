//! Division marker surface forms
//!
//! The grammar yields canonical markers ("II", "1°", "Chapitre" + "III");
//! documents render them as "II.", "II.-", "II -", "1°", "a)" or
//! "Chapitre III". Matching folds case and diacritics the same way the
//! grammar does.

use lexamend_ast::DivisionKind;
use lexamend_lexer::{fold, LATIN_SUFFIXES};

/// Whether `text` opens with `marker` in any accepted surface form
/// for `kind`
pub(crate) fn marker_matches(text: &str, marker: &str, kind: DivisionKind) -> bool {
    let folded = fold(text.trim_start());
    let marker = fold(marker);
    if prefix_match(&folded, &marker) {
        return true;
    }
    // "1°" also claims blocks rendered "1." or "1)"
    if let Some(bare) = marker.strip_suffix('°') {
        if prefix_match(&folded, bare) {
            return true;
        }
    }
    // "Chapitre III" for kinds that carry their noun in headings
    if let Some(noun) = kind.french_noun() {
        if prefix_match(&folded, &format!("{} {}", noun, marker)) {
            return true;
        }
    }
    false
}

/// `pattern` must be followed by a marker boundary: punctuation, end of
/// text, or whitespace that does not introduce a latin suffix ("II" must
/// not claim "II bis")
fn prefix_match(folded: &str, pattern: &str) -> bool {
    let rest = match folded.strip_prefix(pattern) {
        Some(rest) => rest,
        None => return false,
    };
    match rest.chars().next() {
        None => true,
        Some('.') | Some('-') | Some(')') | Some('°') => true,
        Some(c) if c.is_whitespace() => {
            let next_word: String = rest
                .trim_start()
                .chars()
                .take_while(|c| c.is_alphabetic())
                .collect();
            !LATIN_SUFFIXES.contains(&next_word.as_str())
        }
        _ => false,
    }
}

/// Whether a block looks like it opens a division. Terminates the sibling
/// run of a flat division and enumerates candidates for ordinal-indexed
/// division steps.
pub(crate) fn starts_like_division(text: &str) -> bool {
    let t = text.trim_start();
    if t.is_empty() {
        return false;
    }

    // heading nouns: "Chapitre III", "Section 2"
    let folded = fold(t);
    for kind in DivisionKind::ALL {
        if let Some(noun) = kind.french_noun() {
            if let Some(rest) = folded.strip_prefix(noun) {
                if rest.chars().next().map(|c| c.is_whitespace()).unwrap_or(false) {
                    return true;
                }
            }
        }
    }

    let (rest, self_delimited) = match leading_marker(t) {
        Some(found) => found,
        None => return false,
    };
    if self_delimited {
        return true;
    }
    let rest = strip_suffix_word(rest);
    match rest.chars().next() {
        Some('.') | Some('-') | Some(')') => true,
        Some(c) if c.is_whitespace() => {
            let after = rest.trim_start();
            after.starts_with('-') || after.starts_with('–') || after.starts_with('—')
        }
        _ => false,
    }
}

/// The leading marker shape of a block: a roman-letter run, digits
/// (optionally closed by "°"), or a single letter. Returns the remainder
/// and whether the marker closed itself with "°".
fn leading_marker(t: &str) -> Option<(&str, bool)> {
    let roman_len: usize = t.chars().take_while(|c| "IVXLCDM".contains(*c)).count();
    if roman_len > 0 {
        return Some((&t[roman_len..], false));
    }
    let digit_len: usize = t.chars().take_while(|c| c.is_ascii_digit()).count();
    if digit_len > 0 {
        let rest = &t[digit_len..];
        if let Some(after) = rest.strip_prefix('°') {
            return Some((after, true));
        }
        return Some((rest, false));
    }
    let mut chars = t.chars();
    let first = chars.next()?;
    let second = chars.next();
    if first.is_ascii_alphabetic() && !second.map(char::is_alphanumeric).unwrap_or(false) {
        return Some((&t[first.len_utf8()..], false));
    }
    None
}

/// Skip one latin suffix word after a marker: "II bis.-"
fn strip_suffix_word(rest: &str) -> &str {
    let trimmed = rest.trim_start();
    let word: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    if !word.is_empty() && LATIN_SUFFIXES.contains(&fold(&word).as_str()) {
        &trimmed[word.len()..]
    } else {
        rest
    }
}
