//! Diagnostics for the asl parser
//!
//! Parsing stops at the first problem; there is no error recovery. The error names the text the parser was looking
//! for and, unless the input ran out, the token it found instead together with its 1-based position.

use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::Token;

/// A parse failure for one compilation unit
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("expected '{expected}' but found '{found}' at line {line}, column {column}")]
    #[diagnostic(code(asl::parse::unexpected_token))]
    UnexpectedToken {
        expected: String,
        found: String,
        line: usize,
        column: usize,
    },

    #[error("expected '{expected}' but reached the end of input")]
    #[diagnostic(
        code(asl::parse::unexpected_eof),
        help("a closing bracket or semicolon is probably missing")
    )]
    UnexpectedEof { expected: String },
}

impl ParseError {
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: found.text.clone(),
            line: found.line,
            column: found.column,
        }
    }

    pub fn eof(expected: impl Into<String>) -> Self {
        ParseError::UnexpectedEof {
            expected: expected.into(),
        }
    }

    /// The text the parser was looking for.
    pub fn expected(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { expected, .. } | ParseError::UnexpectedEof { expected } => expected,
        }
    }

    /// The offending token text, `None` at end of input.
    pub fn found(&self) -> Option<&str> {
        match self {
            ParseError::UnexpectedToken { found, .. } => Some(found),
            ParseError::UnexpectedEof { .. } => None,
        }
    }

    /// `(line, column)` of the offending token, `None` at end of input.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::UnexpectedToken { line, column, .. } => Some((*line, *column)),
            ParseError::UnexpectedEof { .. } => None,
        }
    }
}
