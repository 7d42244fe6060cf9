//! Define the reserved keyword vocabulary for the asl language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) recording canonical spellings and categories.
//!
//! ## Notes
//! - [`from_str`] is **case-sensitive**; the parser only treats the exact lowercase spelling as a keyword.
//! - [`from_str_ignore_case`] exists for the lexer, which closes a pending token as soon as it spells a keyword in any
//!   letter case.
//! - `else` is deliberately *not* reserved: the lexer treats it as an ordinary word and the parser matches it by text.
//!
//! ## Examples
//! ```rust
//! use asl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("exitwith"), Some(KeywordId::ExitWith));
//! assert_eq!(keywords::from_str("ExitWith"), None);
//! assert_eq!(keywords::from_str_ignore_case("ExitWith"), Some(KeywordId::ExitWith));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Statements / control flow
    Var,
    If,
    While,
    Switch,
    For,
    Foreach,
    Case,
    Default,
    Return,
    Try,
    Catch,
    ExitWith,
    WaitUntil,

    // Definitions
    Func,
    Code,

    // Literals
    True,
    False,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Definition,
    Literal,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Statements / control flow
    info(KeywordId::Var, "var", KeywordCategory::Definition),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Foreach, "foreach", KeywordCategory::ControlFlow),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Try, "try", KeywordCategory::ControlFlow),
    info(KeywordId::Catch, "catch", KeywordCategory::ControlFlow),
    info(KeywordId::ExitWith, "exitwith", KeywordCategory::ControlFlow),
    info(KeywordId::WaitUntil, "waituntil", KeywordCategory::ControlFlow),
    // Definitions
    info(KeywordId::Func, "func", KeywordCategory::Definition),
    info(KeywordId::Code, "code", KeywordCategory::Definition),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal),
    info(KeywordId::False, "false", KeywordCategory::Literal),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by exact spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is the canonical spelling of a keyword.
/// - `None` otherwise (including differently-cased spellings).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Lookup ignoring ASCII letter case.
///
/// Used by the lexer to decide whether a pending word may be closed early.
pub fn from_str_ignore_case(s: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|k| k.canonical.eq_ignore_ascii_case(s))
        .map(|k| k.id)
}

/// Return `true` if `s` spells a keyword in any letter case.
pub fn is_keyword_ignore_case(s: &str) -> bool {
    from_str_ignore_case(s).is_some()
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("var"), Some(KeywordId::Var));
        assert_eq!(from_str("VAR"), None);
        assert_eq!(from_str_ignore_case("VAR"), Some(KeywordId::Var));
    }

    #[test]
    fn test_else_is_not_reserved() {
        assert!(!is_keyword_ignore_case("else"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(category(KeywordId::True), KeywordCategory::Literal);
        assert_eq!(category(KeywordId::Func), KeywordCategory::Definition);
        assert_eq!(category(KeywordId::WaitUntil), KeywordCategory::ControlFlow);
    }
}
