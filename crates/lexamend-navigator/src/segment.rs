//! Sentence segmentation inside blocks
//!
//! The rule is deliberately plain: a sentence ends at terminal punctuation
//! followed by whitespace or end of text. Marker prefixes like "II.-" do
//! not split because their period is not followed by whitespace.

use std::ops::Range;

/// Byte ranges of the sentences of `text`, in reading order, trimmed of
/// surrounding whitespace. Empty segments are dropped.
pub fn sentence_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        // fold runs like "?!" or "..." into one terminator
        while let Some(&(j, c2)) = chars.peek() {
            if is_terminal(c2) {
                chars.next();
                end = j + c2.len_utf8();
            } else {
                break;
            }
        }
        let at_boundary = match chars.peek() {
            None => true,
            Some(&(_, next)) => next.is_whitespace(),
        };
        if at_boundary {
            push_trimmed(text, start..end, &mut spans);
            start = end;
        }
    }
    if start < text.len() {
        push_trimmed(text, start..text.len(), &mut spans);
    }
    spans
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn push_trimmed(text: &str, range: Range<usize>, spans: &mut Vec<Range<usize>>) {
    let segment = &text[range.clone()];
    let trimmed_front = segment.trim_start();
    let lead = segment.len() - trimmed_front.len();
    let trimmed = trimmed_front.trim_end();
    if trimmed.is_empty() {
        return;
    }
    let start = range.start + lead;
    spans.push(start..start + trimmed.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(text: &str) -> Vec<&str> {
        sentence_spans(text)
            .into_iter()
            .map(|r| &text[r])
            .collect()
    }

    #[test]
    fn test_splits_on_terminal_punctuation() {
        assert_eq!(
            segments("Première phrase. Seconde phrase."),
            vec!["Première phrase.", "Seconde phrase."]
        );
    }

    #[test]
    fn test_marker_prefix_does_not_split() {
        assert_eq!(
            segments("II.-Les dispositions s'appliquent. Elles cessent ensuite."),
            vec![
                "II.-Les dispositions s'appliquent.",
                "Elles cessent ensuite."
            ]
        );
    }

    #[test]
    fn test_trailing_text_without_punctuation_counts() {
        assert_eq!(
            segments("Une phrase. Et une fin sans point"),
            vec!["Une phrase.", "Et une fin sans point"]
        );
    }

    #[test]
    fn test_terminator_runs_fold() {
        assert_eq!(segments("Quoi ?! Rien."), vec!["Quoi ?!", "Rien."]);
    }

    #[test]
    fn test_empty_text_has_no_sentences() {
        assert!(sentence_spans("").is_empty());
        assert!(sentence_spans("   ").is_empty());
    }
}
