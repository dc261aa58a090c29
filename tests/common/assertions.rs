use lexamend_ast::{ActionKind, Sentence};

/// Assert that a sentence parses
pub fn assert_parses(source: &str) -> Sentence {
    lexamend_parser::parse(source)
        .unwrap_or_else(|err| panic!("Expected {:?} to parse: {}", source, err))
}

/// Assert that a sentence fails to parse
pub fn assert_parse_fails(source: &str) {
    assert!(
        lexamend_parser::parse(source).is_err(),
        "Expected {:?} to fail parsing",
        source
    );
}

/// Assert a parsed sentence carries an action of the given kind
pub fn assert_action_kind(sentence: &Sentence, kind: ActionKind) {
    let action = sentence
        .action()
        .unwrap_or_else(|| panic!("Expected an action, got {:?}", sentence.parsed));
    assert_eq!(action.kind, kind);
}
