//! Connection type: one scheduled vehicle leg.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{StationId, Timestamp};

/// A single departure/arrival event pair between two stations.
///
/// Connections are plain values and are never mutated after the timetable
/// is built. `departure_time <= arrival_time` is expected but not checked;
/// malformed records flow through the searches unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub departure_station: StationId,
    pub arrival_station: StationId,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
}

impl Connection {
    /// Creates a connection from its four fields.
    pub fn new(
        departure_station: StationId,
        arrival_station: StationId,
        departure_time: Timestamp,
        arrival_time: Timestamp,
    ) -> Self {
        Self {
            departure_station,
            arrival_station,
            departure_time,
            arrival_time,
        }
    }

    /// Time spent on board, `arrival_time - departure_time`.
    pub fn duration(&self) -> i64 {
        self.arrival_time.signed_duration_since(self.departure_time)
    }

    /// Returns true if a traveller at `station` at `time` can board this connection.
    pub fn can_board(&self, station: StationId, time: Timestamp) -> bool {
        self.departure_station == station && self.departure_time >= time
    }
}

/// Formats as `departure_station arrival_station departure_time arrival_time`.
impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.departure_station, self.arrival_station, self.departure_time, self.arrival_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(dep: u32, arr: u32, dep_time: u32, arr_time: u32) -> Connection {
        Connection::new(
            StationId(dep),
            StationId(arr),
            Timestamp(dep_time),
            Timestamp(arr_time),
        )
    }

    #[test]
    fn display_is_line_format() {
        assert_eq!(conn(1, 2, 2000, 3000).to_string(), "1 2 2000 3000");
    }

    #[test]
    fn duration() {
        assert_eq!(conn(1, 3, 4500, 6000).duration(), 1500);
        assert_eq!(conn(1, 3, 6000, 6000).duration(), 0);
    }

    #[test]
    fn malformed_duration_is_negative() {
        assert_eq!(conn(1, 3, 6000, 5000).duration(), -1000);
    }

    #[test]
    fn can_board() {
        let c = conn(1, 2, 2000, 3000);
        assert!(c.can_board(StationId(1), Timestamp(1000)));
        assert!(c.can_board(StationId(1), Timestamp(2000)));
        assert!(!c.can_board(StationId(1), Timestamp(2001)));
        assert!(!c.can_board(StationId(2), Timestamp(1000)));
    }
}
