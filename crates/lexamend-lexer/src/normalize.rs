//! Case and diacritic folding for keyword comparison
//!
//! Amendment prose inflects for gender and number ("remplacé",
//! "remplacée", "remplacés", "remplacées") and published texts are
//! inconsistent about accents on capitals ("Après" vs "APRES"). All
//! keyword matching in the grammar goes through the folded forms
//! produced here.

/// Lowercase `text` and strip French diacritics
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        for lc in c.to_lowercase() {
            match lc {
                'à' | 'â' | 'ä' => out.push('a'),
                'é' | 'è' | 'ê' | 'ë' => out.push('e'),
                'î' | 'ï' => out.push('i'),
                'ô' | 'ö' => out.push('o'),
                'ù' | 'û' | 'ü' => out.push('u'),
                'ç' => out.push('c'),
                'œ' => out.push_str("oe"),
                'æ' => out.push_str("ae"),
                _ => out.push(lc),
            }
        }
    }
    out
}

/// Whether `word` is `keyword` up to case and diacritics.
/// `keyword` must already be folded.
pub fn keyword_eq(word: &str, keyword: &str) -> bool {
    fold(word) == keyword
}

/// Whether `word` is `stem` up to case, diacritics and French agreement
/// endings: `inflected_eq("remplacées", "remplace")` holds, as do the
/// masculine, feminine and plural forms. `stem` must already be folded.
pub fn inflected_eq(word: &str, stem: &str) -> bool {
    match fold(word).strip_prefix(stem) {
        Some(rest) => matches!(rest, "" | "e" | "s" | "es"),
        None => false,
    }
}

/// Latin suffixes that extend a division marker: "III bis", "2° ter"
pub const LATIN_SUFFIXES: &[&str] = &[
    "bis",
    "ter",
    "quater",
    "quinquies",
    "sexies",
    "septies",
    "octies",
    "nonies",
    "decies",
    "undecies",
    "duodecies",
];

/// Whether `word` is one of the latin marker suffixes
pub fn is_latin_suffix(word: &str) -> bool {
    LATIN_SUFFIXES.contains(&fold(word).as_str())
}
