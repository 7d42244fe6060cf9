//! Syntax frontend for the asl language: lexer, parser/code generator, diagnostics and the builtin type registry.
//!
//! The parser emits output-language text directly while it descends; there is no intermediate AST.
//!
//! ## Notes
//! - Every compilation unit owns its own [`parser::Parser`]; nothing here keeps mutable global state except the
//!   write-once registry slot in [`types`].
//! - Vocabulary identity (keywords/delimiters) comes from `asl_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use asl_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize(b"var x = 1;", false);
//! let sqf = parser::parse(&tokens, false).unwrap();
//! assert_eq!(sqf, "x = 1;");
//! ```

pub mod diagnostics;
pub mod emit;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
pub mod types;
