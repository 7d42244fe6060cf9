//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use crate::driver::{self, DriverConfig};
use crate::{CompileOptions, compile_source, lexer, types};

use super::{CliError, CliResult, ExitCode};

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `driver::MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<Vec<u8>> {
    driver::read_source(file_path).map_err(CliError::diagnostic)
}

/// Load the builtin type registry.
pub fn load_types(path: &Path) -> CliResult<()> {
    types::load(path).map_err(CliError::diagnostic)
}

/// Lex and display tokens.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    for tok in &lexer::tokenize(&source, false) {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Compile a single file and print the output.
pub fn emit_file(file_path: &Path, pretty: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let options = CompileOptions::new().with_pretty(pretty);
    match compile_source(&source, &options) {
        Ok(sqf) => {
            print!("{}", sqf);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(CliError::failure(format!(
            "{}: {:?}",
            file_path.display(),
            miette::Report::new(err)
        ))),
    }
}

/// Compile a directory tree.
pub fn compile_dir(config: &DriverConfig) -> CliResult<ExitCode> {
    let report = driver::run(config).map_err(CliError::diagnostic)?;

    let failed = report.failures.len();
    let total = report.compiled.len() + failed;
    for failure in report.failures {
        eprintln!("{:?}", miette::Report::new(failure));
    }

    if failed == 0 {
        println!("✓ {} file(s) compiled", total);
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(format!("\n{} of {} file(s) failed to compile", failed, total)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const VALID: &str = "tests/fixtures/valid/patrol.asl";
    const INVALID: &str = "tests/fixtures/invalid/unclosed_call.asl";

    #[test]
    fn test_lex_file() {
        assert_eq!(lex_file(Path::new(VALID)).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_emit_file() {
        assert_eq!(emit_file(Path::new(VALID), false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(emit_file(Path::new(VALID), true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_emit_file_reports_parse_error() {
        let err = emit_file(Path::new(INVALID), false).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("unclosed_call.asl"));
        assert!(err.message.contains("expected ')'"));
    }

    #[test]
    fn test_missing_file_is_failure() {
        let missing = Path::new("tests/fixtures/valid/missing.asl");
        assert_eq!(read_source(missing).unwrap_err().exit_code, ExitCode::FAILURE);
        assert!(lex_file(missing).is_err());
        assert!(emit_file(missing, false).is_err());
    }
}
