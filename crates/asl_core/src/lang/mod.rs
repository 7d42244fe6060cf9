//! asl language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `PunctuationId`) and look up spellings via registry tables instead
//! of scattering string literals across the lexer and parser.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use asl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("foreach"), Some(KeywordId::Foreach));
//! assert_eq!(keywords::as_str(KeywordId::WaitUntil), "waituntil");
//! ```

pub mod builtins;
pub mod keywords;
pub mod punctuation;
