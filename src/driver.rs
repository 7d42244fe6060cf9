//! Directory driver
//!
//! Finds `.asl` files under an input directory, compiles each one and writes the result to a mirrored location
//! under the output directory:
//!
//! - normal mode: `<out>/<sub-dir>/<stem>.sqf`
//! - function mode: `<out>/functions/<sub-dir>/fn_<stem>.sqf`, plus `<out>/functions.hpp` declaring every compiled
//!   function
//!
//! A file that fails to read, parse or write is reported and skipped; the remaining files are still compiled.

use std::fs;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use asl_syntax::diagnostics::ParseError;
use asl_syntax::types::{self, RegistryError};

use crate::{CompileOptions, compile_source};

/// Source file extension (matched case-insensitively).
pub const SOURCE_EXTENSION: &str = "asl";

/// Output file extension.
pub const OUTPUT_EXTENSION: &str = "sqf";

/// Sub-directory and file prefix used in function mode.
const FUNCTIONS_DIR: &str = "functions";
const FUNCTION_PREFIX: &str = "fn_";
const FUNCTIONS_HEADER: &str = "functions.hpp";

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during compilation.
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

// ============================================================================
// Configuration
// ============================================================================

/// Driver configuration, usually built from command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Descend into sub-directories
    pub recursive: bool,
    pub pretty: bool,
    /// Write `fn_`-prefixed files under `functions/` and a `functions.hpp` header
    pub functions: bool,
    /// Type registry to load before compiling
    pub types_path: Option<PathBuf>,
}

impl DriverConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            recursive: false,
            pretty: false,
            functions: false,
            types_path: None,
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_functions(mut self, functions: bool) -> Self {
        self.functions = functions;
        self
    }

    pub fn with_types_path(mut self, path: Option<PathBuf>) -> Self {
        self.types_path = path;
        self
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors that stop the whole run.
#[derive(Debug, Error, Diagnostic)]
pub enum DriverError {
    #[error("cannot read directory {}", .path.display())]
    #[diagnostic(code(asl::driver::read_dir))]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no asl files found in {}", .path.display())]
    #[diagnostic(code(asl::driver::no_sources), help("use -r to search sub-directories"))]
    NoSources { path: PathBuf },

    #[error("cannot write {}", .path.display())]
    #[diagnostic(code(asl::driver::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Registry(#[from] RegistryError),
}

/// A failure confined to one source file.
#[derive(Debug, Error, Diagnostic)]
pub enum FileError {
    #[error("cannot read {}", .path.display())]
    #[diagnostic(code(asl::driver::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "{file} is too large ({size} bytes, max {max} bytes)",
        file = .path.display(),
        size = .size,
        max = MAX_SOURCE_SIZE
    )]
    #[diagnostic(code(asl::driver::too_large))]
    TooLarge { path: PathBuf, size: u64 },

    #[error("failed to compile {}", .path.display())]
    #[diagnostic(code(asl::driver::compile))]
    Compile {
        path: PathBuf,
        #[source]
        #[diagnostic_source]
        source: ParseError,
    },

    #[error("cannot write {}", .path.display())]
    #[diagnostic(code(asl::driver::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    /// The source file this failure belongs to.
    pub fn path(&self) -> &Path {
        match self {
            FileError::Read { path, .. }
            | FileError::TooLarge { path, .. }
            | FileError::Compile { path, .. }
            | FileError::Write { path, .. } => path,
        }
    }
}

// ============================================================================
// Discovery
// ============================================================================

/// A discovered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path of the `.asl` file
    pub input: PathBuf,
    /// Directory of the file relative to the input directory
    pub relative_dir: PathBuf,
    /// File name without extension
    pub stem: String,
}

impl SourceFile {
    /// Where the compiled output of this file goes.
    pub fn output_path(&self, config: &DriverConfig) -> PathBuf {
        if config.functions {
            config
                .output_dir
                .join(FUNCTIONS_DIR)
                .join(&self.relative_dir)
                .join(format!("{FUNCTION_PREFIX}{}.{OUTPUT_EXTENSION}", self.stem))
        } else {
            config
                .output_dir
                .join(&self.relative_dir)
                .join(format!("{}.{OUTPUT_EXTENSION}", self.stem))
        }
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
}

/// Find the `.asl` files of the input directory, in file-name order.
///
/// ## Errors
/// Returns [`DriverError::ReadDir`] if a directory cannot be listed.
pub fn discover(config: &DriverConfig) -> Result<Vec<SourceFile>, DriverError> {
    let mut files = Vec::new();
    collect_sources(&config.input_dir, Path::new(""), config.recursive, &mut files)?;
    Ok(files)
}

fn collect_sources(
    dir: &Path,
    relative: &Path,
    recursive: bool,
    files: &mut Vec<SourceFile>,
) -> Result<(), DriverError> {
    let read_dir_error = |source| DriverError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_dir_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_dir_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            if recursive {
                collect_sources(&path, &relative.join(entry.file_name()), recursive, files)?;
            }
            continue;
        }

        if !is_source_file(&path) {
            continue;
        }
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        files.push(SourceFile {
            input: path,
            relative_dir: relative.to_path_buf(),
            stem,
        });
    }

    Ok(())
}

// ============================================================================
// Compilation
// ============================================================================

/// Outcome of a driver run.
#[derive(Debug, Default)]
pub struct DriverReport {
    /// `(input, output)` pairs that were written
    pub compiled: Vec<(PathBuf, PathBuf)>,
    pub failures: Vec<FileError>,
    /// Path of the written `functions.hpp`, in function mode
    pub functions_header: Option<PathBuf>,
}

impl DriverReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Read a source file, refusing oversized files.
pub fn read_source(path: &Path) -> Result<Vec<u8>, FileError> {
    let read_error = |source| FileError::Read {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(read_error)?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(FileError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
        });
    }
    fs::read(path).map_err(read_error)
}

/// Compile every discovered file.
///
/// ## Errors
/// Only run-level problems are errors (unreadable input directory, no sources, registry or header failures).
/// Per-file failures are collected in [`DriverReport::failures`].
#[tracing::instrument(skip_all, fields(input = %config.input_dir.display(), output = %config.output_dir.display()))]
pub fn run(config: &DriverConfig) -> Result<DriverReport, DriverError> {
    if config.output_dir.is_absolute() {
        tracing::warn!(
            "Using absolute output path: {}. Consider using a relative path.",
            config.output_dir.display()
        );
    }

    if let Some(path) = &config.types_path {
        types::load(path)?;
    }

    let sources = discover(config)?;
    if sources.is_empty() {
        return Err(DriverError::NoSources {
            path: config.input_dir.clone(),
        });
    }

    let options = CompileOptions::new().with_pretty(config.pretty);
    let mut report = DriverReport::default();
    let mut compiled_stems = Vec::new();

    for source in &sources {
        let output = source.output_path(config);
        match compile_file(&source.input, &output, &options) {
            Ok(()) => {
                tracing::info!("{} -> {}", source.input.display(), output.display());
                compiled_stems.push(source.stem.as_str());
                report.compiled.push((source.input.clone(), output));
            }
            Err(err) => {
                tracing::error!(path = %err.path().display(), "{err}");
                report.failures.push(err);
            }
        }
    }

    if config.functions {
        let header = config.output_dir.join(FUNCTIONS_HEADER);
        write_output(&header, &functions_header(&compiled_stems)).map_err(|source| DriverError::Write {
            path: header.clone(),
            source,
        })?;
        tracing::info!("functions -> {}", header.display());
        report.functions_header = Some(header);
    }

    Ok(report)
}

fn compile_file(input: &Path, output: &Path, options: &CompileOptions) -> Result<(), FileError> {
    let code = read_source(input)?;
    let sqf = compile_source(&code, options).map_err(|source| FileError::Compile {
        path: input.to_path_buf(),
        source,
    })?;
    write_output(output, &sqf).map_err(|source| FileError::Write {
        path: output.to_path_buf(),
        source,
    })
}

fn write_output(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// `functions.hpp` body declaring one class per compiled function.
///
/// The outer `cfgFunctions` wrapper is commented out so the file can be included into an existing one.
pub fn functions_header(stems: &[&str]) -> String {
    let mut text = String::from("//class cfgFunctions {\nclass asl {\n    class asl {\n");
    for stem in stems {
        text.push_str(&format!("        class {stem};\n"));
    }
    text.push_str("    }\n}\n//}");
    text
}
