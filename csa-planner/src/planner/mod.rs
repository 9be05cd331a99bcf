//! Journey planning over a connection timetable.
//!
//! Two searches answer the same kind of query with different goals:
//!
//! - [`earliest`] scans the departure-ordered timetable once and finds the
//!   journey that arrives soonest;
//! - [`fewest`] backtracks over chains of connections and finds the journey
//!   with the fewest legs, ranked by [`rank`] among equals.
//!
//! Both rebuild their answer with [`reconstruct`]. [`Planner`] picks one
//! according to [`SearchConfig`].

mod config;
pub mod earliest;
pub mod fewest;
pub mod rank;
pub mod reconstruct;
mod search;


pub use config::{Algorithm, SearchConfig, UnknownAlgorithm};
pub use earliest::find_earliest;
pub use fewest::find_fewest_legs;
pub use search::{Planner, SearchRequest, SearchResult};
