//! Loading of the builtin type registry
//!
//! The registry is read once, before any compilation, into a process-wide write-once slot. Compilation only reads
//! it; when no registry was loaded every call is treated as a user-defined callable.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use miette::Diagnostic;
use thiserror::Error;

pub use asl_core::lang::builtins::{Arity, FunctionSignature, TypeRegistry};

static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// Errors from loading a type registry file
#[derive(Debug, Error, Diagnostic)]
pub enum RegistryError {
    #[error("cannot read type registry {}", .path.display())]
    #[diagnostic(code(asl::types::io), help("check the path passed to --types"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a type registry is already loaded")]
    #[diagnostic(code(asl::types::already_loaded))]
    AlreadyLoaded,
}

/// Read and parse a registry file without touching the process-wide slot.
///
/// Invalid UTF-8 is replaced rather than rejected; malformed records are skipped.
pub fn load_file(path: impl AsRef<Path>) -> Result<TypeRegistry, RegistryError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8_lossy(&bytes);
    let registry = TypeRegistry::parse(&content);
    tracing::debug!(lines = content.lines().count(), records = registry.len(), "parsed type registry");
    Ok(registry)
}

/// Load a registry file into the process-wide slot.
///
/// ## Errors
/// - [`RegistryError::Io`] when the file cannot be read; the slot stays empty.
/// - [`RegistryError::AlreadyLoaded`] when a registry was loaded before.
pub fn load(path: impl AsRef<Path>) -> Result<(), RegistryError> {
    let path = path.as_ref();
    if REGISTRY.get().is_some() {
        return Err(RegistryError::AlreadyLoaded);
    }

    let registry = load_file(path)?;
    let records = registry.len();
    REGISTRY.set(registry).map_err(|_| RegistryError::AlreadyLoaded)?;
    tracing::info!(path = %path.display(), records, "loaded type registry");
    Ok(())
}

/// The process-wide registry, if one was loaded.
pub fn global() -> Option<&'static TypeRegistry> {
    REGISTRY.get()
}
