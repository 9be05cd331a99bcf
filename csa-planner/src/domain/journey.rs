//! Journey types.
//!
//! A `Journey` represents a complete trip from origin to destination as an
//! ordered sequence of connections.

use super::{Connection, DomainError, StationId, Timestamp};

/// A complete journey from origin to destination.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (arrival station of one = departure station of next)
/// - Each leg departs no earlier than the previous leg arrives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    legs: Vec<Connection>,
}

impl Journey {
    /// Constructs a journey from legs in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The leg list is empty
    /// - Consecutive legs don't share a station
    /// - A leg departs before the previous leg arrives
    ///
    /// # Examples
    ///
    /// ```
    /// use csa_planner::domain::{Connection, Journey, StationId, Timestamp};
    ///
    /// let first = Connection::new(StationId(1), StationId(2), Timestamp(2000), Timestamp(3000));
    /// let second = Connection::new(StationId(2), StationId(5), Timestamp(3500), Timestamp(5000));
    ///
    /// let journey = Journey::new(vec![first, second]).unwrap();
    /// assert_eq!(journey.leg_count(), 2);
    /// assert_eq!(journey.arrival_time(), Timestamp(5000));
    ///
    /// // Legs in the wrong order don't connect
    /// assert!(Journey::new(vec![second, first]).is_err());
    /// ```
    pub fn new(legs: Vec<Connection>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyJourney);
        }

        for window in legs.windows(2) {
            let (prev, next) = (&window[0], &window[1]);
            if prev.arrival_station != next.departure_station {
                return Err(DomainError::StationsNotConnected(
                    prev.arrival_station,
                    next.departure_station,
                ));
            }
            if next.departure_time < prev.arrival_time {
                return Err(DomainError::MissedConnection {
                    arrived: prev.arrival_time,
                    departs: next.departure_time,
                });
            }
        }

        Ok(Journey { legs })
    }

    /// Returns all legs in order.
    pub fn legs(&self) -> &[Connection] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    fn first(&self) -> &Connection {
        // Safe: validated non-empty at construction
        &self.legs[0]
    }

    fn last(&self) -> &Connection {
        &self.legs[self.legs.len() - 1]
    }

    /// Returns the origin station.
    pub fn origin(&self) -> StationId {
        self.first().departure_station
    }

    /// Returns the destination station.
    pub fn destination(&self) -> StationId {
        self.last().arrival_station
    }

    /// Returns the departure time (from first leg).
    pub fn departure_time(&self) -> Timestamp {
        self.first().departure_time
    }

    /// Returns the arrival time (from last leg).
    pub fn arrival_time(&self) -> Timestamp {
        self.last().arrival_time
    }

    /// Returns the time spent on board, summed over legs.
    ///
    /// Waiting time between legs is not included.
    pub fn in_vehicle_duration(&self) -> i64 {
        self.legs.iter().map(Connection::duration).sum()
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
    fn empty_journey_rejected() {
        assert_eq!(Journey::new(vec![]), Err(DomainError::EmptyJourney));
    }

    #[test]
    fn direct_journey() {
        let journey = Journey::new(vec![conn(1, 3, 4500, 6000)]).unwrap();

        assert_eq!(journey.leg_count(), 1);
        assert_eq!(journey.origin(), StationId(1));
        assert_eq!(journey.destination(), StationId(3));
        assert_eq!(journey.departure_time(), Timestamp(4500));
        assert_eq!(journey.arrival_time(), Timestamp(6000));
        assert_eq!(journey.in_vehicle_duration(), 1500);
    }

    #[test]
    fn in_vehicle_duration_excludes_layovers() {
        // 1000 on board, 2000 waiting at station 4, 1000 on board, 2000 waiting, 1000 on board
        let journey = Journey::new(vec![
            conn(1, 4, 2000, 3000),
            conn(4, 3, 5000, 6000),
            conn(3, 5, 8000, 9000),
        ])
        .unwrap();

        assert_eq!(journey.leg_count(), 3);
        assert_eq!(journey.in_vehicle_duration(), 3000);
    }

    #[test]
    fn disconnected_stations_rejected() {
        let result = Journey::new(vec![conn(1, 2, 2000, 3000), conn(3, 5, 3500, 5000)]);
        assert_eq!(
            result,
            Err(DomainError::StationsNotConnected(StationId(2), StationId(3)))
        );
    }

    #[test]
    fn missed_connection_rejected() {
        let result = Journey::new(vec![conn(1, 2, 2000, 3000), conn(2, 5, 2500, 5000)]);
        assert_eq!(
            result,
            Err(DomainError::MissedConnection {
                arrived: Timestamp(3000),
                departs: Timestamp(2500),
            })
        );
    }

    #[test]
    fn zero_layover_allowed() {
        let journey = Journey::new(vec![conn(1, 2, 2000, 3000), conn(2, 3, 3000, 7000)]);
        assert!(journey.is_ok());
    }
}
