//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// One or more answers failed verification
    CheckFailed {
        /// Number of series with a wrong answer
        failed: usize,
        /// Number of series checked
        total: usize,
    },
    /// Readings and answers hold a different number of series
    SeriesCountMismatch {
        /// Series in the readings input
        readings: usize,
        /// Series in the answer input
        answers: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::CheckFailed { failed, total } => {
                write!(f, "Check failed: {failed} of {total} series have wrong answers")
            }
            CliError::SeriesCountMismatch { readings, answers } => write!(
                f,
                "Series count mismatch: {readings} reading series but {answers} answers"
            ),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("week.txt".to_string());
        assert_eq!(error.to_string(), "File not found: week.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_check_failed_display() {
        let error = CliError::CheckFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(
            error.to_string(),
            "Check failed: 2 of 5 series have wrong answers"
        );
    }

    #[test]
    fn test_series_count_mismatch_display() {
        let error = CliError::SeriesCountMismatch {
            readings: 3,
            answers: 1,
        };
        assert!(error.to_string().contains("3 reading series but 1 answers"));
    }

    #[test]
    fn test_error_converts_to_anyhow() {
        let result: CliResult<()> = Err(CliError::ConfigError("bad".to_string()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("bad"));
    }
}
