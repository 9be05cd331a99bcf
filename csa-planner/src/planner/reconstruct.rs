//! Route reconstruction shared by both searches.
//!
//! The earliest-arrival scan leaves behind a predecessor table; the
//! fewest-connections search already holds an ordered path. Both end up as
//! a validated [`Journey`].

use crate::domain::{Connection, DomainError, Journey, StationId};
use crate::timetable::{ConnectionIndex, Timetable};

/// Rebuild a journey by following predecessor links back from `arrival`.
///
/// `predecessors` is indexed by
/// [`StationIndex`](crate::timetable::StationIndex); each entry is the
/// connection that last improved the arrival time at that station. The walk
/// stops on reaching `departure`. It takes at most one step per connection,
/// so a cyclic chain (only possible with malformed connections) is reported
/// as an error rather than followed forever.
///
/// # Errors
///
/// - [`DomainError::BrokenChain`] if a station on the way has no predecessor
///   or the chain never reaches `departure`
/// - any [`Journey::new`] validation error for the collected legs
pub fn from_predecessors(
    timetable: &Timetable,
    predecessors: &[Option<ConnectionIndex>],
    departure: StationId,
    arrival: StationId,
) -> Result<Journey, DomainError> {
    let mut legs = Vec::new();
    let mut station = arrival;

    while station != departure {
        if legs.len() >= timetable.len() {
            return Err(DomainError::BrokenChain(arrival));
        }

        let connection = timetable
            .station_index(station)
            .and_then(|at| predecessors.get(at.0).copied().flatten())
            .and_then(|index| timetable.get(index))
            .ok_or(DomainError::BrokenChain(station))?;

        legs.push(*connection);
        station = connection.departure_station;
    }

    legs.reverse();
    Journey::new(legs)
}

/// Turn an already-ordered candidate path into a journey.
pub fn from_path(path: &[Connection]) -> Result<Journey, DomainError> {
    Journey::new(path.to_vec())
}
