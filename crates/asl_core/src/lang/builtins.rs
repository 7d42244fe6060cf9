//! Builtin command signatures of the output language.
//!
//! The output language exposes its builtins as *commands* with zero, one or two operands (`radioVolume`,
//! `unitReady soldier`, `car setHit ["motor", 1]`). Their signatures come from an external plain-text database that is
//! parsed here into a [`TypeRegistry`].
//!
//! ## Database format
//!
//! One record per line, CRLF or LF terminated. The first byte selects the record kind and the text from offset 2
//! onward is split on spaces:
//!
//! | kind | layout                     | example                     |
//! |------|----------------------------|-----------------------------|
//! | `n`  | `name`                     | `n:radiovolume`             |
//! | `u`  | `name RIGHT`               | `u:unitready OBJECT`        |
//! | `b`  | `LEFT name RIGHT`          | `b:OBJECT sethit ARRAY`     |
//!
//! Operand fields are comma-separated type lists. A list starting with `ARRAY` is a single variadic slot; otherwise
//! every entry except `NaN` counts as one operand.
//!
//! ## Notes
//! - Parsing is lenient: short lines, unknown kinds and records with missing parts are skipped.
//! - Names are matched case-insensitively.
//!
//! ## Examples
//! ```rust
//! use asl_core::lang::builtins::{Arity, TypeRegistry};
//!
//! let registry = TypeRegistry::parse("n:radioVolume\nu:unitReady OBJECT\nb:OBJECT setHit ARRAY\n");
//! let sig = registry.lookup("SETHIT").unwrap();
//! assert_eq!(sig.arity, Arity::Binary);
//! assert!(sig.right_variadic);
//! ```

use std::collections::HashMap;

/// Marker for an operand that takes an array of arbitrary length.
pub const ARRAY_MARKER: &str = "ARRAY";

/// Marker for "no operand" entries inside an operand list.
pub const NAN_MARKER: &str = "NaN";

/// How many sides a builtin takes operands from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// `name`
    Nullary,
    /// `name right`
    Unary,
    /// `left name right`
    Binary,
}

/// A single builtin signature record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub arity: Arity,
    pub left_operand_count: usize,
    pub right_operand_count: usize,
    /// The left operand is an `ARRAY` slot.
    pub left_variadic: bool,
    /// The right operand is an `ARRAY` slot.
    pub right_variadic: bool,
}

impl FunctionSignature {
    /// Return `true` if a call with the given argument-list lengths fits this signature.
    ///
    /// Variadic slots accept any number of arguments, since the compiler brackets multi-element lists into a single
    /// array operand.
    pub fn accepts(&self, left_args: usize, right_args: usize) -> bool {
        let side_ok = |variadic: bool, expected: usize, got: usize| variadic || expected == got;
        match self.arity {
            Arity::Nullary => left_args == 0 && right_args == 0,
            Arity::Unary => left_args == 0 && side_ok(self.right_variadic, self.right_operand_count, right_args),
            Arity::Binary => {
                side_ok(self.left_variadic, self.left_operand_count, left_args)
                    && side_ok(self.right_variadic, self.right_operand_count, right_args)
            }
        }
    }
}

/// Case-insensitive table of builtin signatures.
///
/// A name may map to several records (the output language overloads commands by operand type and arity); the first
/// record read wins for [`TypeRegistry::lookup`].
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    by_name: HashMap<String, Vec<FunctionSignature>>,
    len: usize,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the signature database text.
    pub fn parse(content: &str) -> Self {
        let mut registry = Self::new();
        let content = content.replace("\r\n", "\n");

        for line in content.split('\n') {
            if line.len() < 3 {
                continue;
            }
            if let Some(sig) = parse_record(line) {
                registry.insert(sig);
            }
        }

        registry
    }

    /// Add a signature record.
    pub fn insert(&mut self, sig: FunctionSignature) {
        self.by_name.entry(sig.name.to_ascii_lowercase()).or_default().push(sig);
        self.len += 1;
    }

    /// Return the first signature recorded for `name`, ignoring letter case.
    pub fn lookup(&self, name: &str) -> Option<&FunctionSignature> {
        self.lookup_all(name).first()
    }

    /// Return every signature recorded for `name`, ignoring letter case.
    pub fn lookup_all(&self, name: &str) -> &[FunctionSignature] {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of records (not distinct names).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// --- record parsing ------------------------------------------------------------

fn parse_record(line: &str) -> Option<FunctionSignature> {
    let parts: Vec<&str> = line.get(2..)?.split(' ').collect();

    match line.as_bytes()[0] {
        b'n' => Some(FunctionSignature {
            name: parts[0].to_string(),
            arity: Arity::Nullary,
            left_operand_count: 0,
            right_operand_count: 0,
            left_variadic: false,
            right_variadic: false,
        }),
        b'u' => {
            let [name, right, ..] = parts.as_slice() else {
                return None;
            };
            let (right_operand_count, right_variadic) = operand_count(right);
            Some(FunctionSignature {
                name: name.to_string(),
                arity: Arity::Unary,
                left_operand_count: 0,
                right_operand_count,
                left_variadic: false,
                right_variadic,
            })
        }
        b'b' => {
            let [left, name, right, ..] = parts.as_slice() else {
                return None;
            };
            let (left_operand_count, left_variadic) = operand_count(left);
            let (right_operand_count, right_variadic) = operand_count(right);
            Some(FunctionSignature {
                name: name.to_string(),
                arity: Arity::Binary,
                left_operand_count,
                right_operand_count,
                left_variadic,
                right_variadic,
            })
        }
        _ => None,
    }
}

/// Count the operands described by a comma-separated type list.
fn operand_count(field: &str) -> (usize, bool) {
    let args: Vec<&str> = field.split(',').collect();
    if args[0] == ARRAY_MARKER {
        return (1, true);
    }
    let count = args.iter().filter(|a| !a.eq_ignore_ascii_case(NAN_MARKER)).count();
    (count, false)
}
