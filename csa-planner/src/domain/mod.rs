//! Domain types for the connection planner.
//!
//! This module contains the core domain model: stations, times, connections
//! and journeys. Journeys enforce their invariants at construction time, so
//! code that receives one can trust that its legs chain together.

mod connection;
mod error;
mod journey;
mod station;
mod time;

pub use connection::Connection;
pub use error::DomainError;
pub use journey::Journey;
pub use station::StationId;
pub use time::Timestamp;
