//! Error types for input handling and answer verification

use thiserror::Error;

/// Errors raised at the input boundary, before any series is analysed
#[derive(Debug, Error)]
pub enum Error {
    /// A token could not be read as an integer reading
    #[error("Invalid input format: line {line}: '{token}' is not an integer reading")]
    InvalidReading {
        /// 1-based line of the offending token
        line: usize,
        /// The token as it appeared in the input
        token: String,
    },

    /// A counted record header is not a non-negative integer
    #[error("Invalid input format: record {record}: '{token}' is not a reading count")]
    InvalidCount {
        /// 1-based record number
        record: usize,
        /// The token as it appeared in the input
        token: String,
    },

    /// A counted record ended before all of its readings were seen
    #[error("Invalid input format: record {record} expects {expected} readings but only {found} remain")]
    MissingReadings {
        /// 1-based record number
        record: usize,
        /// Count announced by the record header
        expected: usize,
        /// Readings actually present
        found: usize,
    },

    /// A series is longer than the configured limit
    #[error("Series has {found} readings, more than the limit of {limit}")]
    TooManyReadings {
        /// Configured maximum
        limit: usize,
        /// Length of the rejected series
        found: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for warmer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ways a candidate answer can disagree with its readings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The answer does not hold one entry per reading
    #[error("answer has {answer} entries for {readings} readings")]
    LengthMismatch {
        /// Number of readings
        readings: usize,
        /// Number of answer entries
        answer: usize,
    },

    /// The wait points past the end of the series
    #[error("day {index}: wait of {wait} runs past the last reading")]
    OutOfRange {
        /// Offending position
        index: usize,
        /// Claimed wait
        wait: usize,
    },

    /// The day the wait points to is not strictly warmer
    #[error("day {index}: day {target} is not warmer")]
    NotWarmer {
        /// Offending position
        index: usize,
        /// Position the wait points to
        target: usize,
    },

    /// A strictly warmer day occurs before the one the wait points to
    #[error("day {index}: day {earlier} is already warmer, expected wait {expected}")]
    SkippedWarmer {
        /// Offending position
        index: usize,
        /// First strictly warmer position
        earlier: usize,
        /// Correct wait
        expected: usize,
    },

    /// The answer says no warmer day exists, but one does
    #[error("day {index}: day {warmer} is warmer, expected wait {expected}")]
    MissedWarmer {
        /// Offending position
        index: usize,
        /// First strictly warmer position
        warmer: usize,
        /// Correct wait
        expected: usize,
    },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Infrastructure(err.to_string())
    }
}
