//! Error types for jdts-parser

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unterminated doc comment starting at line {line}")]
    UnterminatedComment { line: usize },

    #[error("Unterminated block comment starting at line {line}")]
    UnterminatedBlockComment { line: usize },
}
