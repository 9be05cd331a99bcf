//! Timetable ingestion error types.

use std::num::ParseIntError;

/// Why a single whitespace-separated record could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Line has too few or too many fields
    #[error("expected {expected} fields, found {found}")]
    WrongFieldCount { expected: usize, found: usize },

    /// A field is not a non-negative integer
    #[error("field {field} ({token:?}) is not a non-negative integer: {source}")]
    InvalidNumber {
        field: usize,
        token: String,
        source: ParseIntError,
    },
}

/// A malformed record, located by its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct ParseError {
    pub line: usize,
    pub source: RecordError,
}

/// Errors that can occur while loading a timetable.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// Reading the input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A connection line was malformed
    #[error("malformed connection: {0}")]
    Parse(#[from] ParseError),
}
