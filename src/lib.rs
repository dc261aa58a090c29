//! Lexamend - Parsing and resolution of French legislative amendments
//!
//! This is the root workspace crate that re-exports the pipeline and
//! hosts the integration tests. The implementation is in the workspace
//! member crates: tokenization and grammar (`lexamend-lexer`,
//! `lexamend-parser`), lowering to navigation steps
//! (`lexamend-compiler`), and resolution against consolidated texts
//! (`lexamend-document`, `lexamend-navigator`).

// Re-export the pipeline crates for convenience
pub use lexamend_ast as ast;
pub use lexamend_compiler as compiler;
pub use lexamend_document as document;
pub use lexamend_lexer as lexer;
pub use lexamend_navigator as navigator;
pub use lexamend_parser as parser;

pub use lexamend_parser::parse;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_smoke() {
        let sentence = parse("Le dernier alinéa du II est abrogé.").unwrap();
        let reference = sentence.reference().unwrap();
        let path = compiler::compile(reference);
        assert_eq!(path.steps.len(), 2);
        assert!(path.warnings.is_empty());
    }
}
