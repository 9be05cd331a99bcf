//! Domain error types.
//!
//! These errors represent validation failures when assembling journeys.
//! They are distinct from ingestion and IO errors.

use super::{StationId, Timestamp};

/// Domain-level errors for journey validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Journey has no legs
    #[error("journey must have at least one leg")]
    EmptyJourney,

    /// Consecutive legs don't meet at the same station
    #[error("leg arriving at {0} is followed by a leg departing from {1}")]
    StationsNotConnected(StationId, StationId),

    /// Next leg departs before the previous one arrives
    #[error("leg departing at {departs} cannot follow a leg arriving at {arrived}")]
    MissedConnection {
        arrived: Timestamp,
        departs: Timestamp,
    },

    /// Predecessor links do not lead back to the departure station
    #[error("predecessor chain from {0} does not reach the departure station")]
    BrokenChain(StationId),
}
