//! Writing query answers in the configured output format.

use std::io::{self, Write};

use serde::Serialize;

use super::config::OutputFormat;
use super::error::SessionError;
use crate::domain::{Connection, Journey};

/// Text marker for a query without a journey.
pub const NO_SOLUTION: &str = "NO_SOLUTION";

/// A journey as written in JSON output.
///
/// No solution serializes as an empty `legs` array.
#[derive(Debug, Serialize)]
pub struct JourneyResult<'a> {
    /// Connections in travel order
    pub legs: &'a [Connection],
}

impl<'a> JourneyResult<'a> {
    /// Build from a search answer.
    pub fn from_answer(journey: Option<&'a Journey>) -> Self {
        Self {
            legs: journey.map(Journey::legs).unwrap_or(&[]),
        }
    }
}

/// Write one answer followed by its terminator, then flush.
pub fn write_answer<W: Write>(
    out: &mut W,
    format: OutputFormat,
    journey: Option<&Journey>,
) -> Result<(), SessionError> {
    match format {
        OutputFormat::Text => write_text(out, journey)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &JourneyResult::from_answer(journey))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// `NO_SOLUTION` or one connection per line, then a blank line.
pub fn write_text<W: Write>(out: &mut W, journey: Option<&Journey>) -> io::Result<()> {
    match journey {
        None => writeln!(out, "{NO_SOLUTION}")?,
        Some(journey) => {
            for leg in journey.legs() {
                writeln!(out, "{leg}")?;
            }
        }
    }
    writeln!(out)
}
