//! Station identifier type.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a station in the timetable.
///
/// Station ids are non-negative integers and need not be contiguous; the
/// timetable maps the ones it sees to dense indices.
///
/// # Examples
///
/// ```
/// use csa_planner::domain::StationId;
///
/// let station: StationId = "42".parse().unwrap();
/// assert_eq!(station, StationId(42));
///
/// // Negative ids are rejected
/// assert!("-1".parse::<StationId>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl FromStr for StationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(StationId)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
