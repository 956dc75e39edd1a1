use thiserror::Error;

/// Failure to produce a syntax tree for one build script.
///
/// Parse failures are per-file and non-fatal: the caller logs them, excludes
/// the file from results, and continues with the next one. Parsing is
/// deterministic, so there is no retry path.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unterminated string literal starting at line {line}")]
    UnterminatedString { line: usize },

    #[error("unterminated block comment starting at line {line}")]
    UnterminatedComment { line: usize },

    #[error("unmatched `{delimiter}` at line {line}")]
    UnmatchedDelimiter { delimiter: char, line: usize },

    #[error("unexpected end of script inside `{context}` opened at line {line}")]
    UnexpectedEof { context: &'static str, line: usize },
}
