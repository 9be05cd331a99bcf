//! The line protocol: a timetable block, then one query per line.
//!
//! Input is a block of connection lines ended by a blank line (unless the
//! timetable comes from a file), followed by query lines of the form
//! `departure_station arrival_station start_time`. Each query is answered
//! before the next one is read, so a client can drive the session
//! interactively. A blank line or end of input ends the session.

mod config;
mod error;
pub mod render;

pub use config::{
    ALGORITHM_VAR, ConfigError, MAX_EXPANSIONS_VAR, OUTPUT_VAR, OutputFormat, SessionConfig,
    TIMETABLE_VAR,
};
pub use error::SessionError;

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::domain::{StationId, Timestamp};
use crate::planner::{Algorithm, Planner, SearchRequest};
use crate::timetable::{Block, Timetable, parse_record};

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Query lines answered, malformed ones included.
    pub queries: usize,

    /// Queries answered with a journey.
    pub solved: usize,

    /// Queries whose search ran out of expansion budget.
    pub exhausted: usize,
}

/// Load the timetable, then answer queries from `input` until it ends.
///
/// # Errors
///
/// Returns `Err` if the timetable cannot be loaded or on IO failure.
/// Malformed queries are logged and answered with no solution.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &SessionConfig,
) -> Result<SessionSummary, SessionError> {
    let (timetable, first_query_line) = match &config.timetable_path {
        Some(path) => {
            let timetable = Timetable::from_path(path)?;
            info!(path = %path.display(), "Loaded timetable from file");
            (timetable, 1)
        }
        None => {
            let mut block = Block::new(input, 1);
            let timetable = Timetable::from_block(&mut block)?;
            (timetable, block.line_number() + 1)
        }
    };

    info!(
        connections = timetable.len(),
        stations = timetable.station_count(),
        algorithm = %config.search.algorithm,
        "Timetable ready"
    );

    if config.search.algorithm == Algorithm::EarliestArrival && !timetable.is_departure_ordered()
    {
        warn!("Timetable is not sorted by departure time; earliest-arrival answers may be wrong");
    }

    let planner = Planner::new(&timetable, &config.search);
    let mut summary = SessionSummary::default();
    let mut queries = Block::new(input, first_query_line);

    while let Some((line, text)) = queries.next_line()? {
        let journey = match parse_record::<3>(text) {
            Ok([departure, arrival, start_time]) => {
                let request = SearchRequest::new(
                    StationId(departure),
                    StationId(arrival),
                    Timestamp(start_time),
                );
                let result = planner.search(&request);
                debug!(
                    line,
                    departure,
                    arrival,
                    start_time,
                    explored = result.explored,
                    legs = result.journey.as_ref().map(|j| j.leg_count()),
                    "Answered query"
                );
                if result.exhausted {
                    summary.exhausted += 1;
                }
                result.journey
            }
            Err(err) => {
                warn!(line, query = text, error = %err, "Malformed query, answering with no solution");
                None
            }
        };

        summary.queries += 1;
        if journey.is_some() {
            summary.solved += 1;
        }
        render::write_answer(output, config.output, journey.as_ref())?;
    }

    Ok(summary)
}
