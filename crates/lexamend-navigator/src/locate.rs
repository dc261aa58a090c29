//! Step resolution against a block tree
//!
//! The navigator keeps a scope while applying steps left to right. A
//! scope is a contiguous run of sibling blocks, addressed by the tree
//! path of their parent; sentence and word steps narrow it to a byte
//! range inside a single block.

use std::ops::Range;

use lexamend_ast::PortionUnit;
use lexamend_compiler::{CompiledPath, NavigationStep};
use lexamend_document::{Block, Document};
use serde::{Deserialize, Serialize};

use crate::error::{NavigationError, NavigationErrorKind};
use crate::marker::{marker_matches, starts_like_division};
use crate::segment::sentence_spans;

/// The document region a path resolves to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Located {
    /// A run of sibling blocks. `path` addresses their parent
    /// (empty for the top level), `range` indexes the sibling list.
    Blocks {
        path: Vec<usize>,
        range: Range<usize>,
    },
    /// One sentence of a block, as a byte range of its text
    Sentence {
        path: Vec<usize>,
        range: Range<usize>,
    },
    /// An arbitrary byte range of one block's text
    Span {
        path: Vec<usize>,
        range: Range<usize>,
    },
}

impl Located {
    /// The selected text, extracted from `document`. Block runs join
    /// their blocks with newlines.
    pub fn fragment_text(&self, document: &Document) -> String {
        match self {
            Located::Blocks { path, range } => {
                let siblings = siblings_of(document, path);
                let texts: Vec<&str> = sibling_run(siblings, range)
                    .iter()
                    .map(|block| block.text.as_str())
                    .collect();
                texts.join("\n")
            }
            Located::Sentence { path, range } | Located::Span { path, range } => {
                block_at(document, path)
                    .and_then(|block| block.text.get(range.clone()))
                    .unwrap_or_default()
                    .to_string()
            }
        }
    }
}

/// Resolve a compiled path against a document
pub fn locate(document: &Document, path: &CompiledPath) -> Result<Located, NavigationError> {
    locate_steps(document, &path.steps)
}

/// Resolve a step sequence against a document
pub fn locate_steps(
    document: &Document,
    steps: &[NavigationStep],
) -> Result<Located, NavigationError> {
    let mut scope = root_scope(document);
    for step in steps {
        scope = apply_step(document, scope, step)?;
    }
    Ok(scope)
}

fn root_scope(document: &Document) -> Located {
    Located::Blocks {
        path: Vec::new(),
        range: 0..document.blocks.len(),
    }
}

fn apply_step(
    document: &Document,
    scope: Located,
    step: &NavigationStep,
) -> Result<Located, NavigationError> {
    match step {
        // A cited text or article re-anchors at the document root; the
        // caller is responsible for handing in the right document.
        NavigationStep::Scope { .. } => Ok(root_scope(document)),

        NavigationStep::Division {
            kind,
            marker,
            index,
        } => {
            let (path, range) = match &scope {
                Located::Blocks { path, range } => (path.clone(), range.clone()),
                _ => return Err(fail(step, &scope, NavigationErrorKind::Unsupported)),
            };
            let siblings = siblings_of(document, &path);
            let blocks = sibling_run(siblings, &range);
            let matched = match (marker, index) {
                (Some(marker), _) => {
                    let found = blocks
                        .iter()
                        .position(|block| marker_matches(&block.text, marker, *kind));
                    match found {
                        Some(offset) => range.start + offset,
                        None => {
                            return Err(fail(
                                step,
                                &scope,
                                NavigationErrorKind::MarkerNotFound {
                                    marker: marker.clone(),
                                },
                            ))
                        }
                    }
                }
                (None, Some(index)) => {
                    let candidates: Vec<usize> = blocks
                        .iter()
                        .enumerate()
                        .filter(|(_, block)| starts_like_division(&block.text))
                        .map(|(offset, _)| range.start + offset)
                        .collect();
                    match select_ordinal(&candidates, *index) {
                        Some(&abs) => abs,
                        None => {
                            return Err(fail(step, &scope, ordinal_error(*index, candidates.len())))
                        }
                    }
                }
                (None, None) => return Err(fail(step, &scope, NavigationErrorKind::Unsupported)),
            };
            Ok(enter_division(path, siblings, matched, range.end))
        }

        NavigationStep::Portion {
            unit: PortionUnit::Paragraph,
            ordinal,
        } => {
            let (path, range) = match &scope {
                Located::Blocks { path, range } => (path.clone(), range.clone()),
                _ => return Err(fail(step, &scope, NavigationErrorKind::Unsupported)),
            };
            let indices: Vec<usize> = range.clone().collect();
            match select_ordinal(&indices, *ordinal) {
                Some(&abs) => Ok(Located::Blocks {
                    path,
                    range: abs..abs + 1,
                }),
                None => Err(fail(step, &scope, ordinal_error(*ordinal, indices.len()))),
            }
        }

        NavigationStep::Portion {
            unit: PortionUnit::Sentence,
            ordinal,
        } => {
            let (path, range) = match &scope {
                Located::Blocks { path, range } => (path.clone(), range.clone()),
                _ => return Err(fail(step, &scope, NavigationErrorKind::Unsupported)),
            };
            let siblings = siblings_of(document, &path);
            // Sentences count cumulatively across the scope's blocks
            let mut sentences: Vec<(usize, Range<usize>)> = Vec::new();
            for (offset, block) in sibling_run(siblings, &range).iter().enumerate() {
                for span in sentence_spans(&block.text) {
                    sentences.push((range.start + offset, span));
                }
            }
            match select_ordinal(&sentences, *ordinal) {
                Some((abs, span)) => {
                    let mut path = path;
                    path.push(*abs);
                    Ok(Located::Sentence {
                        path,
                        range: span.clone(),
                    })
                }
                None => Err(fail(step, &scope, ordinal_error(*ordinal, sentences.len()))),
            }
        }

        NavigationStep::Words { needle } => match &scope {
            Located::Blocks { path, range } => {
                let siblings = siblings_of(document, path);
                for (offset, block) in sibling_run(siblings, range).iter().enumerate() {
                    if let Some(at) = block.text.find(needle.as_str()) {
                        let mut path = path.clone();
                        path.push(range.start + offset);
                        return Ok(Located::Span {
                            path,
                            range: at..at + needle.len(),
                        });
                    }
                }
                Err(fail(
                    step,
                    &scope,
                    NavigationErrorKind::WordsNotFound {
                        needle: needle.clone(),
                    },
                ))
            }
            Located::Sentence { path, range } | Located::Span { path, range } => {
                let text = block_at(document, path)
                    .and_then(|block| block.text.get(range.clone()))
                    .unwrap_or_default();
                match text.find(needle.as_str()) {
                    Some(at) => {
                        let start = range.start + at;
                        Ok(Located::Span {
                            path: path.clone(),
                            range: start..start + needle.len(),
                        })
                    }
                    None => Err(fail(
                        step,
                        &scope,
                        NavigationErrorKind::WordsNotFound {
                            needle: needle.clone(),
                        },
                    )),
                }
            }
        },
    }
}

/// Entering a division selects its children when the tree nests. Flat
/// layouts instead yield the run of siblings strictly after the heading,
/// up to the next block that opens a division, within the current scope.
fn enter_division(path: Vec<usize>, siblings: &[Block], matched: usize, limit: usize) -> Located {
    if let Some(block) = siblings.get(matched) {
        if !block.children.is_empty() {
            let len = block.children.len();
            let mut path = path;
            path.push(matched);
            return Located::Blocks {
                path,
                range: 0..len,
            };
        }
    }
    let mut end = matched + 1;
    while end < limit {
        match siblings.get(end) {
            Some(block) if !starts_like_division(&block.text) => end += 1,
            _ => break,
        }
    }
    Located::Blocks {
        path,
        range: matched + 1..end,
    }
}

/// The sibling list addressed by `path`, empty if the path dangles
fn siblings_of<'d>(document: &'d Document, path: &[usize]) -> &'d [Block] {
    let mut blocks: &[Block] = &document.blocks;
    for &index in path {
        match blocks.get(index) {
            Some(block) => blocks = &block.children,
            None => return &[],
        }
    }
    blocks
}

/// The block a full path addresses
fn block_at<'d>(document: &'d Document, path: &[usize]) -> Option<&'d Block> {
    let (&last, parent) = path.split_last()?;
    siblings_of(document, parent).get(last)
}

fn sibling_run<'d>(siblings: &'d [Block], range: &Range<usize>) -> &'d [Block] {
    siblings.get(range.clone()).unwrap_or(&[])
}

/// 1-based selection; negative ordinals count from the end, so -1 is
/// the last element. 0 never selects.
fn select_ordinal<T>(items: &[T], ordinal: i64) -> Option<&T> {
    let len = items.len() as i64;
    let index = match ordinal {
        0 => return None,
        n if n > 0 => n - 1,
        n => len + n,
    };
    if index < 0 || index >= len {
        return None;
    }
    items.get(index as usize)
}

fn ordinal_error(ordinal: i64, len: usize) -> NavigationErrorKind {
    if len == 0 {
        NavigationErrorKind::EmptyScope
    } else {
        NavigationErrorKind::OrdinalOutOfRange { ordinal, len }
    }
}

fn fail(step: &NavigationStep, scope: &Located, kind: NavigationErrorKind) -> NavigationError {
    NavigationError {
        step: step.clone(),
        scope: describe_scope(scope),
        kind,
    }
}

fn describe_path(path: &[usize]) -> String {
    if path.is_empty() {
        return "the document root".to_string();
    }
    let mut out = String::from("block ");
    for (i, index) in path.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(&index.to_string());
    }
    out
}

fn describe_scope(scope: &Located) -> String {
    match scope {
        Located::Blocks { path, range } => format!(
            "blocks {}..{} under {}",
            range.start,
            range.end,
            describe_path(path)
        ),
        Located::Sentence { path, .. } => format!("a sentence of {}", describe_path(path)),
        Located::Span { path, .. } => format!("a text span of {}", describe_path(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexamend_ast::DivisionKind;

    fn flat_article() -> Document {
        Document::with_title(
            "Article 224",
            vec![
                Block::new("I.-Les dispositions générales s'appliquent."),
                Block::new("Elles précisent le champ retenu."),
                Block::new("II.-Le régime spécial est défini."),
                Block::new("Les conditions sont fixées par décret."),
                Block::new("Un arrêté précise les modalités."),
                Block::new("La première phrase s'applique. Il comporte une seconde phrase."),
                Block::new("III.-Les sanctions sont prévues."),
                Block::new("Une disposition finale clôt l'article."),
            ],
        )
    }

    fn nested_chapters() -> Document {
        Document::new(vec![
            Block::with_children(
                "Chapitre Ier : Principes",
                vec![Block::new("Les principes s'énoncent simplement.")],
            ),
            Block::with_children(
                "Chapitre III : Sanctions",
                vec![
                    Block::new("Les sanctions sont graduées."),
                    Block::new("Elles se prescrivent par trois ans."),
                ],
            ),
        ])
    }

    fn division(marker: &str) -> NavigationStep {
        NavigationStep::Division {
            kind: DivisionKind::Item,
            marker: Some(marker.to_string()),
            index: None,
        }
    }

    fn paragraph(ordinal: i64) -> NavigationStep {
        NavigationStep::Portion {
            unit: PortionUnit::Paragraph,
            ordinal,
        }
    }

    fn sentence(ordinal: i64) -> NavigationStep {
        NavigationStep::Portion {
            unit: PortionUnit::Sentence,
            ordinal,
        }
    }

    fn words(needle: &str) -> NavigationStep {
        NavigationStep::Words {
            needle: needle.to_string(),
        }
    }

    #[test]
    fn test_division_marker_selects_flat_run() {
        let doc = flat_article();
        let located = locate_steps(&doc, &[division("II")]).unwrap();
        assert_eq!(
            located,
            Located::Blocks {
                path: vec![],
                range: 3..6
            }
        );
    }

    #[test]
    fn test_division_enters_children_when_nested() {
        let doc = nested_chapters();
        let step = NavigationStep::Division {
            kind: DivisionKind::Chapter,
            marker: Some("III".to_string()),
            index: None,
        };
        let located = locate_steps(&doc, &[step]).unwrap();
        assert_eq!(
            located,
            Located::Blocks {
                path: vec![1],
                range: 0..2
            }
        );
    }

    #[test]
    fn test_scope_step_resets_to_roots() {
        let doc = flat_article();
        let steps = [
            division("II"),
            NavigationStep::Scope { id: None },
            division("I"),
        ];
        let located = locate_steps(&doc, &steps).unwrap();
        assert_eq!(
            located,
            Located::Blocks {
                path: vec![],
                range: 1..2
            }
        );
    }

    #[test]
    fn test_division_marker_missing() {
        let doc = flat_article();
        let err = locate_steps(&doc, &[division("IV")]).unwrap_err();
        assert_eq!(
            err.kind,
            NavigationErrorKind::MarkerNotFound {
                marker: "IV".to_string()
            }
        );
        assert!(err.to_string().contains("IV"));
    }

    #[test]
    fn test_division_by_ordinal() {
        let doc = flat_article();
        let second = NavigationStep::Division {
            kind: DivisionKind::Item,
            marker: None,
            index: Some(2),
        };
        let located = locate_steps(&doc, &[second]).unwrap();
        assert_eq!(
            located,
            Located::Blocks {
                path: vec![],
                range: 3..6
            }
        );

        let last = NavigationStep::Division {
            kind: DivisionKind::Item,
            marker: None,
            index: Some(-1),
        };
        let located = locate_steps(&doc, &[last]).unwrap();
        assert_eq!(
            located,
            Located::Blocks {
                path: vec![],
                range: 7..8
            }
        );
    }

    #[test]
    fn test_paragraph_ordinal_within_division() {
        let doc = flat_article();
        let first = locate_steps(&doc, &[division("II"), paragraph(1)]).unwrap();
        assert_eq!(
            first,
            Located::Blocks {
                path: vec![],
                range: 3..4
            }
        );

        // The last paragraph of the II, not of the document
        let last = locate_steps(&doc, &[division("II"), paragraph(-1)]).unwrap();
        assert_eq!(
            last,
            Located::Blocks {
                path: vec![],
                range: 5..6
            }
        );
    }

    #[test]
    fn test_paragraph_ordinal_out_of_range() {
        let doc = flat_article();
        let err = locate_steps(&doc, &[division("II"), paragraph(4)]).unwrap_err();
        assert_eq!(
            err.kind,
            NavigationErrorKind::OrdinalOutOfRange { ordinal: 4, len: 3 }
        );
    }

    #[test]
    fn test_sentence_selection_counts_across_blocks() {
        let doc = flat_article();
        let located = locate_steps(&doc, &[division("II"), sentence(4)]).unwrap();
        match &located {
            Located::Sentence { path, .. } => assert_eq!(path, &vec![5]),
            other => panic!("expected a sentence, got {:?}", other),
        }
        assert_eq!(
            located.fragment_text(&doc),
            "Il comporte une seconde phrase."
        );

        let last = locate_steps(&doc, &[division("II"), sentence(-1)]).unwrap();
        assert_eq!(last, located);
    }

    #[test]
    fn test_words_selects_first_occurrence() {
        let doc = flat_article();
        let located = locate_steps(&doc, &[division("II"), words("par décret")]).unwrap();
        let expected = doc.blocks[3].text.find("par décret").unwrap();
        assert_eq!(
            located,
            Located::Span {
                path: vec![3],
                range: expected..expected + "par décret".len()
            }
        );
        assert_eq!(located.fragment_text(&doc), "par décret");
    }

    #[test]
    fn test_words_search_stays_inside_selected_sentence() {
        let doc = flat_article();
        let located = locate_steps(&doc, &[division("II"), sentence(-1), words("phrase")]).unwrap();
        let first_in_block = doc.blocks[5].text.find("phrase").unwrap();
        match located {
            Located::Span { path, range } => {
                assert_eq!(path, vec![5]);
                assert!(range.start > first_in_block);
                assert_eq!(&doc.blocks[5].text[range], "phrase");
            }
            other => panic!("expected a span, got {:?}", other),
        }
    }

    #[test]
    fn test_words_missing() {
        let doc = flat_article();
        let err = locate_steps(&doc, &[words("inexistant")]).unwrap_err();
        assert_eq!(
            err.kind,
            NavigationErrorKind::WordsNotFound {
                needle: "inexistant".to_string()
            }
        );
        assert!(err.to_string().contains("inexistant"));
    }

    #[test]
    fn test_empty_flat_division() {
        let doc = Document::new(vec![
            Block::new("II.-Le premier cas."),
            Block::new("III.-Le second cas."),
        ]);
        let located = locate_steps(&doc, &[division("II")]).unwrap();
        assert_eq!(
            located,
            Located::Blocks {
                path: vec![],
                range: 1..1
            }
        );

        let err = locate_steps(&doc, &[division("II"), paragraph(1)]).unwrap_err();
        assert_eq!(err.kind, NavigationErrorKind::EmptyScope);
    }

    #[test]
    fn test_division_cannot_refine_a_sentence() {
        let doc = flat_article();
        let err = locate_steps(&doc, &[sentence(1), division("II")]).unwrap_err();
        assert_eq!(err.kind, NavigationErrorKind::Unsupported);
    }

    #[test]
    fn test_fragment_text_joins_block_runs() {
        let doc = flat_article();
        let located = locate_steps(&doc, &[division("II")]).unwrap();
        let text = located.fragment_text(&doc);
        assert!(text.starts_with("Les conditions sont fixées par décret.\n"));
        assert!(text.ends_with("Il comporte une seconde phrase."));
    }
}
