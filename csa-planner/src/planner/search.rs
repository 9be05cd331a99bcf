//! Query dispatch.
//!
//! A [`Planner`] binds a timetable to a configuration and answers one
//! [`SearchRequest`] at a time with whichever algorithm is configured.

use tracing::debug;

use super::config::{Algorithm, SearchConfig};
use super::{earliest, fewest};
use crate::domain::{Journey, StationId, Timestamp};
use crate::timetable::Timetable;

/// One journey query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    /// Where the traveller starts.
    pub departure: StationId,

    /// Where the traveller wants to go.
    pub arrival: StationId,

    /// Earliest time the traveller can leave.
    pub start_time: Timestamp,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(departure: StationId, arrival: StationId, start_time: Timestamp) -> Self {
        Self {
            departure,
            arrival,
            start_time,
        }
    }
}

/// Result of a journey search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen journey, or `None` if there is no solution.
    pub journey: Option<Journey>,

    /// Connections scanned or search states expanded, depending on the algorithm.
    pub explored: usize,

    /// True if the search stopped on its expansion budget.
    pub exhausted: bool,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            journey: None,
            explored: 0,
            exhausted: false,
        }
    }
}

/// Journey planner over a fixed timetable.
///
/// Holds only shared references, so one timetable can serve any number of
/// planners, and a planner any number of queries.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    timetable: &'a Timetable,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(timetable: &'a Timetable, config: &'a SearchConfig) -> Self {
        Self { timetable, config }
    }

    /// Answer a single query.
    pub fn search(&self, request: &SearchRequest) -> SearchResult {
        let SearchRequest {
            departure,
            arrival,
            start_time,
        } = *request;

        if departure == arrival {
            debug!(station = %departure, "Departure equals arrival, no journey");
            return SearchResult::empty();
        }

        match self.config.algorithm {
            Algorithm::EarliestArrival => {
                match earliest::scan(self.timetable, departure, arrival, start_time) {
                    Some(scan) => SearchResult {
                        journey: scan.journey_to(arrival),
                        explored: scan.scanned(),
                        exhausted: false,
                    },
                    None => SearchResult::empty(),
                }
            }
            Algorithm::FewestConnections => {
                let outcome = fewest::search(
                    self.timetable,
                    departure,
                    arrival,
                    start_time,
                    self.config.max_expansions,
                );
                SearchResult {
                    journey: outcome.journey,
                    explored: outcome.expansions,
                    exhausted: outcome.exhausted,
                }
            }
        }
    }
}
