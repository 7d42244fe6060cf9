//! Parser and code generator for the asl language
//!
//! A recursive-descent parser that validates asl tokens and writes the equivalent output-language text while it
//! descends. There is no AST: every production emits as soon as it has consumed its tokens.
//!
//! ## Examples
//!
//! ```rust
//! use asl_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize(b"var y = [1,2,3];", false);
//! assert_eq!(parser::parse(&tokens, true).unwrap(), "y = [1,2,3];\r\n");
//! ```

use crate::diagnostics::ParseError;
use crate::emit::{EmitConfig, OutputWriter};
use crate::lexer::{self, Token};
use crate::types::{self, TypeRegistry};
use asl_core::lang::keywords::{self, KeywordId};
use asl_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
