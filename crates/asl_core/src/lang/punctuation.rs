//! Punctuation vocabulary.
//!
//! The asl lexer has exactly one class of punctuation: single-byte *delimiters*. Every delimiter always terminates
//! the word being accumulated and becomes a one-character token of its own. Multi-character operators such as `==`,
//! `&&` or `<=` are never lexed as a unit; the parser reassembles them from consecutive delimiter tokens.
//!
//! ## Notes
//! - Lookup via [`from_str`] / [`from_byte`] is exact.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use asl_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_byte(b'{'), Some(PunctuationId::LBrace));
//! assert_eq!(punctuation::as_str(PunctuationId::Pipe), "|");
//! assert!(!punctuation::is_delimiter(b'.'));
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,`, `;` and `:`.
    Separator,
    /// Operator fragments like `+`, `<`, `&`.
    Operator,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Semicolon,
    Comma,
    Colon,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // Operator fragments
    Assign,
    Lt,
    Gt,
    Bang,
    Amp,
    Pipe,
    Plus,
    Minus,
    Star,
    Slash,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    // Delimiters
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
    // Operator fragments
    info(PunctuationId::Assign, "=", PunctuationCategory::Operator),
    info(PunctuationId::Lt, "<", PunctuationCategory::Operator),
    info(PunctuationId::Gt, ">", PunctuationCategory::Operator),
    info(PunctuationId::Bang, "!", PunctuationCategory::Operator),
    info(PunctuationId::Amp, "&", PunctuationCategory::Operator),
    info(PunctuationId::Pipe, "|", PunctuationCategory::Operator),
    info(PunctuationId::Plus, "+", PunctuationCategory::Operator),
    info(PunctuationId::Minus, "-", PunctuationCategory::Operator),
    info(PunctuationId::Star, "*", PunctuationCategory::Operator),
    info(PunctuationId::Slash, "/", PunctuationCategory::Operator),
];

pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Lookup by the single source byte.
pub fn from_byte(b: u8) -> Option<PunctuationId> {
    PUNCTUATION
        .iter()
        .find(|p| p.canonical.as_bytes() == [b])
        .map(|p| p.id)
}

/// Return `true` if `b` always terminates a word and forms its own token.
pub fn is_delimiter(b: u8) -> bool {
    from_byte(b).is_some()
}

// --- helpers -----------------------------------------------------------------

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
