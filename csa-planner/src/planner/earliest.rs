//! Earliest-arrival connection scan.
//!
//! One forward pass over a departure-ordered timetable propagates the
//! soonest reachable time of every station. The connection that last
//! improved a station is remembered, so the journey to the target can be
//! rebuilt from the predecessor links afterwards.

use tracing::{debug, trace, warn};

use super::reconstruct;
use crate::domain::{Journey, StationId, Timestamp};
use crate::timetable::{ConnectionIndex, Timetable};

/// Per-query tables left behind by a connection scan.
///
/// Both tables are dense over the timetable's stations and are allocated
/// fresh for every query.
#[derive(Debug, Clone)]
pub struct ArrivalScan<'a> {
    timetable: &'a Timetable,
    departure: StationId,
    best_arrival: Vec<Option<Timestamp>>,
    predecessor: Vec<Option<ConnectionIndex>>,
    scanned: usize,
}

impl ArrivalScan<'_> {
    /// Soonest known arrival at `station`, if it was reached.
    ///
    /// For stations other than the target this is only a bound: the scan
    /// stops early once nothing can improve the target.
    pub fn arrival_at(&self, station: StationId) -> Option<Timestamp> {
        let index = self.timetable.station_index(station)?;
        self.best_arrival[index.0]
    }

    /// The connection that last improved `station`.
    pub fn predecessor_of(&self, station: StationId) -> Option<ConnectionIndex> {
        let index = self.timetable.station_index(station)?;
        self.predecessor[index.0]
    }

    /// Number of connections examined before the scan finished.
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    /// Rebuild the journey to `arrival`, or `None` if it was never reached.
    pub fn journey_to(&self, arrival: StationId) -> Option<Journey> {
        self.predecessor_of(arrival)?;

        match reconstruct::from_predecessors(
            self.timetable,
            &self.predecessor,
            self.departure,
            arrival,
        ) {
            Ok(journey) => Some(journey),
            Err(e) => {
                warn!(
                    departure = %self.departure,
                    arrival = %arrival,
                    error = %e,
                    "Predecessor chain is inconsistent, reporting no solution"
                );
                None
            }
        }
    }
}

/// Run the connection scan from `departure` at `start_time`.
///
/// `arrival` only drives early termination. Returns `None` without scanning
/// when either station does not occur in the timetable.
pub fn scan<'a>(
    timetable: &'a Timetable,
    departure: StationId,
    arrival: StationId,
    start_time: Timestamp,
) -> Option<ArrivalScan<'a>> {
    let (Some(from), Some(target)) = (
        timetable.station_index(departure),
        timetable.station_index(arrival),
    ) else {
        debug!(%departure, %arrival, "Station outside timetable, skipping scan");
        return None;
    };

    let mut best_arrival = vec![None; timetable.station_count()];
    let mut predecessor = vec![None; timetable.station_count()];
    best_arrival[from.0] = Some(start_time);

    // Best arrival at the target found so far
    let mut target_bound: Option<Timestamp> = None;
    let mut scanned = 0;

    let rows = timetable.connections().iter().zip(timetable.endpoints());
    for (i, (connection, ends)) in rows.enumerate() {
        scanned += 1;

        let reachable =
            best_arrival[ends.departure.0].is_some_and(|t| connection.departure_time >= t);
        let improves =
            best_arrival[ends.arrival.0].is_none_or(|t| connection.arrival_time < t);

        if reachable && improves {
            best_arrival[ends.arrival.0] = Some(connection.arrival_time);
            predecessor[ends.arrival.0] = Some(ConnectionIndex(i));

            if ends.arrival == target {
                target_bound = Some(
                    target_bound.map_or(connection.arrival_time, |b| b.min(connection.arrival_time)),
                );
            }
        } else if target_bound.is_some_and(|b| connection.departure_time >= b) {
            // Everything from here on departs at or after the bound, so it
            // cannot arrive any sooner.
            trace!(index = i, "Connection departs after target bound, stopping scan");
            break;
        }
    }

    debug!(
        %departure,
        %arrival,
        scanned,
        total = timetable.len(),
        target = ?target_bound,
        "Connection scan complete"
    );

    Some(ArrivalScan {
        timetable,
        departure,
        best_arrival,
        predecessor,
        scanned,
    })
}

/// Find the journey from `departure` to `arrival` that arrives soonest.
///
/// Requires connections in non-decreasing departure time order. Returns
/// `None` if no journey exists, if the stations are equal, or if either does
/// not occur in the timetable.
pub fn find_earliest(
    timetable: &Timetable,
    departure: StationId,
    arrival: StationId,
    start_time: Timestamp,
) -> Option<Journey> {
    if departure == arrival {
        return None;
    }

    scan(timetable, departure, arrival, start_time)?.journey_to(arrival)
}
