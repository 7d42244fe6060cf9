//! CLI module for the asl compiler
//!
//! This module provides the command-line interface for the compiler.
//!
//! ## Usage
//!
//! - `asl [OPTIONS] <INPUT_DIR> [OUTPUT_DIR]` - Compile every `.asl` file of a directory
//! - `asl --lex <FILE>` - Print the tokens of one file (debug)
//! - `asl --emit <FILE>` - Print the compiled output of one file (debug)
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::driver::DriverConfig;
use crate::version::ASL_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a failure error rendering a diagnostic with miette.
    pub fn diagnostic(diagnostic: impl miette::Diagnostic + Send + Sync + 'static) -> Self {
        Self::failure(format!("{:?}", miette::Report::new(diagnostic)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The asl to SQF compiler
#[derive(Parser, Debug)]
#[command(name = "asl")]
#[command(version = ASL_VERSION)]
#[command(about = "Compiles asl source files to SQF", long_about = None)]
pub struct Cli {
    /// Directory containing .asl files
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Output directory; the input directory structure is recreated below it
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Compile .asl files in sub-directories too
    #[arg(short, long)]
    pub recursive: bool,

    /// Pretty-print the output (one statement per line)
    #[arg(long)]
    pub pretty: bool,

    /// Function mode: write functions/<dir>/fn_<name>.sqf and a functions.hpp header
    #[arg(short = 'f', long = "functions")]
    pub functions: bool,

    /// Builtin type registry to check two-sided calls against
    #[arg(short = 't', long = "types", value_name = "FILE")]
    pub types_file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "input_dir")]
    pub lex_file: Option<PathBuf>,

    /// Print compiled output of a single file (debug)
    #[arg(long = "emit", value_name = "FILE", conflicts_with = "input_dir")]
    pub emit_file: Option<PathBuf>,
}

impl Cli {
    /// Driver configuration for the directory mode, if an input directory was given.
    pub fn driver_config(&self) -> Option<DriverConfig> {
        let input_dir = self.input_dir.as_ref()?;
        Some(
            DriverConfig::new(input_dir, &self.output_dir)
                .with_recursive(self.recursive)
                .with_pretty(self.pretty)
                .with_functions(self.functions)
                .with_types_path(self.types_file.clone()),
        )
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = &cli.lex_file {
        return commands::lex_file(file);
    }
    if let Some(file) = &cli.emit_file {
        if let Some(types) = &cli.types_file {
            commands::load_types(types)?;
        }
        return commands::emit_file(file, cli.pretty);
    }

    match cli.driver_config() {
        Some(config) => commands::compile_dir(&config),
        None => Err(CliError::failure("Error: no input directory given (see --help)")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_dirs() {
        let cli = Cli::try_parse_from(["asl", "scripts", "build"]).unwrap();
        assert_eq!(cli.input_dir, Some(PathBuf::from("scripts")));
        assert_eq!(cli.output_dir, PathBuf::from("build"));
    }

    #[test]
    fn test_cli_output_dir_defaults_to_current() {
        let cli = Cli::try_parse_from(["asl", "scripts"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::try_parse_from(["asl", "-r", "--pretty", "-f", "-t", "types.txt", "in", "out"]).unwrap();
        let config = cli.driver_config().unwrap();
        assert!(config.recursive);
        assert!(config.pretty);
        assert!(config.functions);
        assert_eq!(config.types_path, Some(PathBuf::from("types.txt")));
        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["asl", "--lex", "test.asl"]).unwrap();
        assert!(cli.lex_file.is_some());
        assert!(cli.driver_config().is_none());

        let cli = Cli::try_parse_from(["asl", "--emit", "test.asl", "--pretty"]).unwrap();
        assert!(cli.emit_file.is_some());
        assert!(cli.pretty);
    }

    #[test]
    fn test_cli_debug_flag_conflicts_with_input_dir() {
        assert!(Cli::try_parse_from(["asl", "--lex", "test.asl", "scripts"]).is_err());
    }

    #[test]
    fn test_missing_input_dir_is_failure() {
        let cli = Cli::try_parse_from(["asl"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_unreadable_types_file_is_failure() {
        let cli = Cli::try_parse_from(["asl", "-t", "/definitely/not/here/types.txt", "tests/fixtures/valid"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("types.txt"));
        assert!(crate::types::global().is_none());

        let cli = Cli::try_parse_from(["asl", "-t", "/definitely/not/here/types.txt", "--emit", "x.asl"]).unwrap();
        assert_eq!(execute(cli).unwrap_err().exit_code, ExitCode::FAILURE);
    }
}
