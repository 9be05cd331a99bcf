//! Connection-scan journey planner.
//!
//! Reads a timetable of point-to-point connections, then answers
//! "how do I get from A to B, leaving no earlier than T?" either by earliest
//! arrival or by fewest connections.

pub mod domain;
pub mod planner;
pub mod session;
pub mod timetable;
