//! Session error types.

use crate::timetable::TimetableError;

/// Errors that end a query session.
///
/// Malformed queries are not among them; those are answered with no solution.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading queries or writing answers failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The timetable could not be loaded
    #[error("cannot load timetable: {0}")]
    Timetable(#[from] TimetableError),

    /// JSON output could not be written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
