#![forbid(unsafe_code)]
//! asl to SQF compiler
//!
//! asl is a C-like scripting language that compiles source-to-source into SQF. This crate ties the syntax frontend
//! (`asl_syntax`) to the outer world: a directory driver, the command line interface and a one-call library entry
//! point.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//!
//! ```rust
//! use asl::{CompileOptions, compile_source};
//!
//! let sqf = compile_source("var x = foo(1, 2);", &CompileOptions::new()).unwrap();
//! assert_eq!(sqf, "x = ([1, 2] call foo);");
//! ```

pub mod cli;
pub mod driver;
pub mod version;

pub use asl_syntax::diagnostics;
pub use asl_syntax::emit;
pub use asl_syntax::lexer;
pub use asl_syntax::parser;
pub use asl_syntax::types;

pub use asl_syntax::diagnostics::ParseError;
pub use asl_syntax::emit::EmitConfig;
pub use asl_syntax::types::{RegistryError, TypeRegistry};

/// Options for [`compile_source`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Emit CRLF line breaks after statements and block openers
    pub pretty: bool,
}

impl CompileOptions {
    /// Create options with default settings (dense output)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the output is pretty-printed
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Compile one asl compilation unit to SQF.
///
/// Builtin-form calls are checked against the process-wide type registry when one was loaded.
///
/// ## Errors
/// Returns the first [`ParseError`] of the unit.
pub fn compile_source(source: impl AsRef<[u8]>, options: &CompileOptions) -> Result<String, ParseError> {
    let tokens = lexer::tokenize(source.as_ref(), false);
    parser::parse(&tokens, options.pretty)
}
