//! Shared, pure vocabulary for the asl compiler.
//!
//! This crate is intentionally small and dependency-free. It owns the canonical tables that both the lexer and the
//! parser consult:
//! - the reserved keyword set,
//! - the single-byte delimiter set,
//! - the builtin signature model and the parser for the signature database text.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO** and no global state. Loading a signature database from disk and the
//!   process-wide registry slot live in `asl_syntax::types`.

pub mod lang;
