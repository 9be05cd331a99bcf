//! Fewest-connections backtracking search.
//!
//! Explores every chain of boardable connections leaving the departure
//! station, depth first and in timetable order, and keeps the best complete
//! journey under [`rank::preference`]. Two prunes keep this tractable in
//! practice:
//!
//! - a connection is only a candidate if it departs no earlier than the
//!   latest arrival along the path so far, so a leg that arrives before it
//!   departs never reopens connections an earlier leg already ruled out;
//! - a partial path that already has as many legs as the best journey found
//!   so far is abandoned.
//!
//! The search is still exponential in the worst case. An optional expansion
//! budget bounds the work; when it runs out the best journey so far is
//! returned and the outcome is flagged as exhausted.
//!
//! Instead of copying the candidate pool for every branch, connections on the
//! current path are marked in a shared `used` table that is set on descent
//! and cleared on backtrack, so sibling branches never see each other's
//! choices. The recursion is kept on an explicit stack.

use tracing::{debug, trace, warn};

use super::rank::{self, RankKey};
use super::reconstruct;
use crate::domain::{Connection, Journey, StationId, Timestamp};
use crate::timetable::{ConnectionIndex, StationIndex, Timetable};

/// Result of a fewest-connections search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FewestOutcome {
    /// Best journey found, if any.
    pub journey: Option<Journey>,

    /// Number of search states entered.
    pub expansions: usize,

    /// True if the expansion budget ran out before the search finished.
    /// The journey is then the best found so far, not necessarily optimal.
    pub exhausted: bool,
}

impl FewestOutcome {
    fn nothing() -> Self {
        Self {
            journey: None,
            expansions: 0,
            exhausted: false,
        }
    }
}

/// Best complete journey seen so far.
#[derive(Debug)]
struct BestCandidate {
    key: RankKey,
    legs: Vec<Connection>,
}

/// One level of the explicit search stack.
#[derive(Debug)]
struct Frame {
    /// Connection that led here; `None` for the starting state.
    via: Option<ConnectionIndex>,
    station: StationId,
    at: StationIndex,
    /// Earliest departure a next leg may have; never decreases along a path.
    time: Timestamp,
    /// Next position to try in `departures_at(at)`.
    cursor: usize,
}

struct Backtracker<'a> {
    timetable: &'a Timetable,
    target: StationId,
    budget: Option<usize>,

    used: Vec<bool>,
    path: Vec<Connection>,
    stack: Vec<Frame>,
    best: Option<BestCandidate>,
    expansions: usize,
}

impl<'a> Backtracker<'a> {
    fn new(timetable: &'a Timetable, target: StationId, budget: Option<usize>) -> Self {
        Self {
            timetable,
            target,
            budget,
            used: vec![false; timetable.len()],
            path: Vec::new(),
            stack: Vec::new(),
            best: None,
            expansions: 0,
        }
    }

    fn best_legs(&self) -> Option<usize> {
        self.best.as_ref().map(|b| b.key.legs)
    }

    /// A partial path of `len` legs that cannot beat the best journey.
    fn too_long(&self, len: usize) -> bool {
        self.best_legs().is_some_and(|best| len >= best)
    }

    /// Count one expansion. Returns false once the budget is spent.
    fn charge(&mut self) -> bool {
        self.expansions += 1;
        self.budget.is_none_or(|budget| self.expansions <= budget)
    }

    /// Next unused connection boardable from `frame`, advancing its cursor.
    fn next_candidate(&self, frame: &mut Frame) -> Option<ConnectionIndex> {
        let departures = self.timetable.departures_at(frame.at);

        while let Some(&index) = departures.get(frame.cursor) {
            frame.cursor += 1;
            if self.used[index.0] {
                continue;
            }
            match self.timetable.get(index) {
                Some(c) if c.can_board(frame.station, frame.time) => return Some(index),
                _ => continue,
            }
        }

        None
    }

    /// Offer the current path as a complete journey.
    fn consider_path(&mut self) {
        let Some(key) = RankKey::of(&self.path) else {
            return;
        };

        if rank::is_better(&key, self.best.as_ref().map(|b| &b.key)) {
            trace!(
                legs = key.legs,
                arrival = %key.arrival,
                departure = %key.departure,
                in_vehicle = key.in_vehicle,
                "New best journey"
            );
            self.best = Some(BestCandidate {
                key,
                legs: self.path.clone(),
            });
        }
    }

    fn descend(&mut self, index: ConnectionIndex, connection: Connection) {
        self.used[index.0] = true;
        self.path.push(connection);
    }

    fn retreat(&mut self, index: ConnectionIndex) {
        self.used[index.0] = false;
        self.path.pop();
    }

    /// Run to completion (or until the budget is spent). Returns true if the
    /// budget ran out.
    fn run(&mut self, departure: StationId, from: StationIndex, start_time: Timestamp) -> bool {
        self.stack.push(Frame {
            via: None,
            station: departure,
            at: from,
            time: start_time,
            cursor: 0,
        });
        if !self.charge() {
            return true;
        }

        while let Some(mut frame) = self.stack.pop() {
            // Frame depth equals the path length; once the best journey is
            // this short, no extension of this path can win.
            let candidate = if self.too_long(self.path.len()) {
                None
            } else {
                self.next_candidate(&mut frame)
            };

            let Some(index) = candidate else {
                if let Some(via) = frame.via {
                    self.retreat(via);
                }
                continue;
            };

            let horizon = frame.time;
            self.stack.push(frame);
            let (Some(&connection), Some(&ends)) = (
                self.timetable.get(index),
                self.timetable.endpoints().get(index.0),
            ) else {
                continue;
            };
            self.descend(index, connection);

            if !self.charge() {
                return true;
            }

            if connection.arrival_station == self.target {
                // Complete: record it and go no deeper
                self.consider_path();
                self.retreat(index);
            } else if self.too_long(self.path.len()) {
                self.retreat(index);
            } else {
                self.stack.push(Frame {
                    via: Some(index),
                    station: connection.arrival_station,
                    at: ends.arrival,
                    time: horizon.max(connection.arrival_time),
                    cursor: 0,
                });
            }
        }

        false
    }
}

/// Search for the journey with the fewest legs, bounded by `budget` expansions.
///
/// Returns an outcome with no journey without searching if the stations are
/// equal or either does not occur in the timetable.
pub fn search(
    timetable: &Timetable,
    departure: StationId,
    arrival: StationId,
    start_time: Timestamp,
    budget: Option<usize>,
) -> FewestOutcome {
    if departure == arrival {
        return FewestOutcome::nothing();
    }
    let Some(from) = timetable.station_index(departure) else {
        debug!(%departure, %arrival, "Station outside timetable, skipping search");
        return FewestOutcome::nothing();
    };
    if !timetable.contains_station(arrival) {
        debug!(%departure, %arrival, "Station outside timetable, skipping search");
        return FewestOutcome::nothing();
    }

    let mut backtracker = Backtracker::new(timetable, arrival, budget);
    let exhausted = backtracker.run(departure, from, start_time);

    if exhausted {
        warn!(
            %departure,
            %arrival,
            expansions = backtracker.expansions,
            found = backtracker.best.is_some(),
            "Search budget exhausted, returning best journey so far"
        );
    }

    let journey = backtracker.best.take().and_then(|best| {
        reconstruct::from_path(&best.legs)
            .inspect_err(|e| warn!(error = %e, "Candidate path is not a valid journey"))
            .ok()
    });

    debug!(
        %departure,
        %arrival,
        expansions = backtracker.expansions,
        legs = journey.as_ref().map(Journey::leg_count),
        exhausted,
        "Fewest-connections search complete"
    );

    FewestOutcome {
        journey,
        expansions: backtracker.expansions,
        exhausted,
    }
}

/// Find the journey from `departure` to `arrival` with the fewest legs.
///
/// Among journeys with equally few legs the earliest arrival wins, then the
/// latest departure, then the least time on board; a complete tie keeps the
/// journey found first. Returns `None` if no journey exists.
pub fn find_fewest_legs(
    timetable: &Timetable,
    departure: StationId,
    arrival: StationId,
    start_time: Timestamp,
) -> Option<Journey> {
    search(timetable, departure, arrival, start_time, None).journey
}
