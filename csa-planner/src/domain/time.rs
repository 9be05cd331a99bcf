//! Timetable time handling.
//!
//! Timetables express times as plain non-negative integers with no calendar
//! attached. This module wraps them so that times and time differences are
//! not confused with station ids or leg counts.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A point in timetable time.
///
/// Only ordering and differences are meaningful; the unit is whatever the
/// timetable uses.
///
/// # Examples
///
/// ```
/// use csa_planner::domain::Timestamp;
///
/// let dep: Timestamp = "2000".parse().unwrap();
/// let arr = Timestamp(3000);
/// assert_eq!(arr.signed_duration_since(dep), 1000);
/// assert_eq!(dep.signed_duration_since(arr), -1000);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub u32);

impl Timestamp {
    /// Returns `self - earlier` as a signed difference.
    ///
    /// Negative when `earlier` is actually later, which only happens for
    /// malformed connections that arrive before they depart.
    pub fn signed_duration_since(self, earlier: Timestamp) -> i64 {
        i64::from(self.0) - i64::from(earlier.0)
    }
}

impl FromStr for Timestamp {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Timestamp)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
