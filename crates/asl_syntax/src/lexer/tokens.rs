//! Token type for the asl lexer.
//!
//! Tokens are deliberately stringly: the parser matches most constructs by their exact text (`else` is not even a
//! reserved word), and expression text is echoed to the output unchanged. Use `crate::token_helpers` for ID-based
//! checks against the `asl_core::lang` registries.

/// A lexed token.
///
/// ## Notes
/// - String literals keep their surrounding quotes and backslash escapes verbatim.
/// - A directive token holds a whole source line starting with `#`, without its line break.
/// - `line`/`column` are 1-based and point at the token's first byte in the comment-stripped source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub is_directive: bool,
    pub line: usize,
    pub column: usize,
}

impl Token {
    /// Construct an ordinary token.
    pub fn new(text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            text: text.into(),
            is_directive: false,
            line,
            column,
        }
    }

    /// Construct a directive token.
    pub fn directive(text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            text: text.into(),
            is_directive: true,
            line,
            column,
        }
    }
}
