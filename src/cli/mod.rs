//! CLI for decision admission
//!
//! Thin layer over the engine: argument parsing, output rendering, and the
//! exit-code contract CI hooks depend on.

pub mod commands;
pub mod output;

pub use commands::{AdmitCli, AdmitCommands};
pub use output::OutputFormat;

use crate::error::AdmissionError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful execution; the change was admitted, or the command has
    /// no verdict
    Success = 0,
    /// Evaluation completed and the change was rejected
    Rejected = 1,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Exit code for a completed evaluation
    pub fn from_verdict(admitted: bool) -> Self {
        if admitted {
            ExitCode::Success
        } else {
            ExitCode::Rejected
        }
    }

    /// Exit code for an error that aborted before any verdict existed
    pub fn from_error(error: &AdmissionError) -> Self {
        match error {
            AdmissionError::FileError(_) => ExitCode::FileError,
            AdmissionError::InvalidInput(_) | AdmissionError::ParseError(_) => {
                ExitCode::InvalidInput
            }
            _ => ExitCode::InternalError,
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub fn run(cli: AdmitCli) -> Result<ExitCode, AdmissionError> {
    match cli.command {
        AdmitCommands::Check {
            contract,
            repo_root,
            artifacts_dir,
            write_artifacts,
            strict: _,
            non_strict,
            format,
        } => commands::execute_check(
            contract,
            repo_root,
            artifacts_dir,
            write_artifacts,
            !non_strict,
            format,
        ),
        AdmitCommands::Record {
            contract,
            repo_root,
            artifacts_dir,
            strict: _,
            non_strict,
            format,
        } => commands::execute_record(contract, repo_root, artifacts_dir, !non_strict, format),
        AdmitCommands::Snapshot {
            contract,
            repo_root,
            artifacts_dir,
        } => commands::execute_snapshot(contract, repo_root, artifacts_dir),
        AdmitCommands::Debt {
            repo_root,
            artifacts_dir,
            format,
        } => commands::execute_debt(repo_root, artifacts_dir, format),
        AdmitCommands::Route { repo_root } => commands::execute_route(repo_root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Rejected), 1);
        assert_eq!(i32::from(ExitCode::InvalidInput), 3);
        assert_eq!(i32::from(ExitCode::FileError), 4);
        assert_eq!(i32::from(ExitCode::InternalError), 10);
    }

    #[test]
    fn test_from_verdict() {
        assert_eq!(ExitCode::from_verdict(true), ExitCode::Success);
        assert_eq!(ExitCode::from_verdict(false), ExitCode::Rejected);
    }

    #[test]
    fn test_from_error_mapping() {
        assert_eq!(
            ExitCode::from_error(&AdmissionError::file_error("missing")),
            ExitCode::FileError
        );
        assert_eq!(
            ExitCode::from_error(&AdmissionError::invalid_input("not a mapping")),
            ExitCode::InvalidInput
        );
        assert_eq!(
            ExitCode::from_error(&AdmissionError::parse_error("bad yaml")),
            ExitCode::InvalidInput
        );
        assert_eq!(
            ExitCode::from_error(&AdmissionError::SchemaError("broken".to_string())),
            ExitCode::InternalError
        );
        assert_eq!(
            ExitCode::from_error(&AdmissionError::internal_error("bug")),
            ExitCode::InternalError
        );
    }
}
