//! Journey preference for the fewest-connections search.
//!
//! Decides which of two candidate journeys is better so the search can keep
//! a single best candidate without storing the others.

use std::cmp::Ordering;

use crate::domain::{Connection, Journey, Timestamp};

/// The figures a journey is ranked by.
///
/// Computed straight from a leg slice so that candidates can be compared
/// before a `Journey` is built for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankKey {
    /// Number of legs.
    pub legs: usize,
    /// Arrival time of the last leg.
    pub arrival: Timestamp,
    /// Departure time of the first leg.
    pub departure: Timestamp,
    /// Time spent on board, layovers excluded.
    pub in_vehicle: i64,
}

impl RankKey {
    /// Key for a leg sequence, or `None` if it is empty.
    pub fn of(legs: &[Connection]) -> Option<Self> {
        let first = legs.first()?;
        let last = legs.last()?;

        Some(Self {
            legs: legs.len(),
            arrival: last.arrival_time,
            departure: first.departure_time,
            in_vehicle: legs.iter().map(Connection::duration).sum(),
        })
    }
}

impl From<&Journey> for RankKey {
    fn from(journey: &Journey) -> Self {
        Self {
            legs: journey.leg_count(),
            arrival: journey.arrival_time(),
            departure: journey.departure_time(),
            in_vehicle: journey.in_vehicle_duration(),
        }
    }
}

/// Tie-break between journeys with the same number of legs.
///
/// `Less` means `a` is preferred:
/// 1. Arrival time (earlier is better)
/// 2. First departure (later is better)
/// 3. Time on board (shorter is better)
///
/// `Equal` means neither is preferred; the caller keeps whichever it saw first.
pub fn tie_break(a: &RankKey, b: &RankKey) -> Ordering {
    a.arrival
        .cmp(&b.arrival)
        .then_with(|| b.departure.cmp(&a.departure))
        .then_with(|| a.in_vehicle.cmp(&b.in_vehicle))
}

/// Full preference order: fewer legs first, then [`tie_break`].
pub fn preference(a: &RankKey, b: &RankKey) -> Ordering {
    a.legs.cmp(&b.legs).then_with(|| tie_break(a, b))
}

/// Returns true if `candidate` should replace `best`.
///
/// Ties keep the incumbent.
pub fn is_better(candidate: &RankKey, best: Option<&RankKey>) -> bool {
    match best {
        None => true,
        Some(best) => preference(candidate, best) == Ordering::Less,
    }
}
