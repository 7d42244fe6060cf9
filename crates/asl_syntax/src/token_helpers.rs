//! Small helper APIs for working with [`Token`].
//!
//! These helpers exist to reduce repetitive string comparisons at call sites and to make it easy to match tokens
//! against the ID-based vocabulary in `asl_core::lang`.

use crate::lexer::Token;
use asl_core::lang::keywords::{self, KeywordId};
use asl_core::lang::punctuation::{self, PunctuationId};

impl Token {
    /// Return `true` if the token text is exactly `text`.
    pub fn is(&self, text: &str) -> bool {
        !self.is_directive && self.text == text
    }

    /// Return the keyword id, if this token spells a keyword exactly.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        if self.is_directive {
            return None;
        }
        keywords::from_str(&self.text)
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.is(keywords::as_str(id))
    }

    /// Return the punctuation id, if this is a delimiter token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        if self.is_directive {
            return None;
        }
        punctuation::from_str(&self.text)
    }

    /// Return `true` if this is the given delimiter.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.is(punctuation::as_str(id))
    }

    /// Return `true` if the token is a string literal (quoted on both ends).
    pub fn is_string_literal(&self) -> bool {
        !self.is_directive && self.text.len() >= 2 && self.text.starts_with('"') && self.text.ends_with('"')
    }
}
