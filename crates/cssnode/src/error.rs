//! Error types for stylesheet parsing.

use std::fmt;
use thiserror::Error;

/// 1-based line and column of a byte offset in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn locate(source: &str, offset: usize) -> Self {
        let before = &source[..offset.min(source.len())];
        let line = before.matches('\n').count() + 1;
        let column = match before.rfind('\n') {
            Some(newline) => before[newline + 1..].chars().count() + 1,
            None => before.chars().count() + 1,
        };
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that can occur while building a stylesheet tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `{` was never closed.
    #[error("unclosed block opened at {0}")]
    UnclosedBlock(Position),

    /// A `}` appeared with no open block.
    #[error("unexpected `}}` at {0}")]
    UnexpectedCloseBrace(Position),

    /// A `/*` comment was never closed.
    #[error("unterminated comment starting at {0}")]
    UnterminatedComment(Position),

    /// A quoted string ran to the end of input.
    #[error("unterminated string starting at {0}")]
    UnterminatedString(Position),

    /// A `(` or `[` was never closed.
    #[error("unbalanced `{delimiter}` at {position}")]
    Unbalanced { delimiter: char, position: Position },
}
