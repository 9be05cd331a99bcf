//! The timetable: an ordered, read-only list of connections.
//!
//! Both searches share one `Timetable`. It is built once, before any query,
//! and never changes afterwards, so it can be shared freely between queries.

mod error;
mod parse;

pub use error::{ParseError, RecordError, TimetableError};
pub use parse::{Block, parse_connection, parse_record};

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::{Connection, StationId};

/// Position of a connection within the timetable.
///
/// Searches refer to connections by index rather than by reference, so
/// per-query tables stay plain `Copy` data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionIndex(pub usize);

impl std::fmt::Display for ConnectionIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dense position of a station that occurs in the timetable.
///
/// Station ids can be sparse, so per-station tables are indexed by this
/// instead of by the id itself. Indices are handed out in order of first
/// appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIndex(pub usize);

/// Dense indices of a connection's departure and arrival stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub departure: StationIndex,
    pub arrival: StationIndex,
}

/// An ordered sequence of connections with a per-station departure index.
///
/// The earliest-arrival scan requires connections in non-decreasing
/// departure time order; [`Timetable::is_departure_ordered`] reports whether
/// that holds. The least-connections search works on any order.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    connections: Vec<Connection>,

    /// Station indices of each connection, parallel to `connections`.
    endpoints: Vec<Endpoints>,

    /// Stations that occur in some connection.
    stations: HashMap<StationId, StationIndex>,

    /// Connections departing each station, in timetable order.
    departures: Vec<Vec<ConnectionIndex>>,
}

impl Timetable {
    /// Build a timetable from connections in scan order.
    pub fn new(connections: Vec<Connection>) -> Self {
        let mut stations: HashMap<StationId, StationIndex> = HashMap::new();
        let mut departures: Vec<Vec<ConnectionIndex>> = Vec::new();

        let mut intern = |station: StationId, departures: &mut Vec<Vec<ConnectionIndex>>| {
            *stations.entry(station).or_insert_with(|| {
                departures.push(Vec::new());
                StationIndex(departures.len() - 1)
            })
        };

        let mut endpoints = Vec::with_capacity(connections.len());
        for (i, connection) in connections.iter().enumerate() {
            let departure = intern(connection.departure_station, &mut departures);
            let arrival = intern(connection.arrival_station, &mut departures);
            departures[departure.0].push(ConnectionIndex(i));
            endpoints.push(Endpoints { departure, arrival });
        }

        Self {
            connections,
            endpoints,
            stations,
            departures,
        }
    }

    /// Read connection lines until a blank line or end of input.
    ///
    /// The terminating blank line is consumed; anything after it is left in
    /// `reader` for the caller (typically the query stream).
    ///
    /// # Errors
    ///
    /// Returns `Err` on IO failure or on the first malformed line.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self, TimetableError> {
        Self::from_block(&mut Block::new(reader, 1))
    }

    /// Read the remaining lines of `block` as connections.
    ///
    /// Afterwards [`Block::line_number`] tells where the following block starts.
    pub fn from_block<R: BufRead>(block: &mut Block<'_, R>) -> Result<Self, TimetableError> {
        let mut connections = Vec::new();

        while let Some((line, text)) = block.next_line()? {
            let connection =
                parse_connection(text).map_err(|source| ParseError { line, source })?;
            connections.push(connection);
        }

        Ok(Self::new(connections))
    }

    /// Load a timetable file in the same line format as [`Timetable::read_from`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TimetableError> {
        let file = File::open(path)?;
        Self::read_from(&mut BufReader::new(file))
    }

    /// Returns all connections in timetable order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Returns the connection at `index`, if in range.
    pub fn get(&self, index: ConnectionIndex) -> Option<&Connection> {
        self.connections.get(index.0)
    }

    /// Returns the number of connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Returns true if the timetable has no connections.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Station indices of every connection, in timetable order.
    pub fn endpoints(&self) -> &[Endpoints] {
        &self.endpoints
    }

    /// Number of distinct stations in the timetable.
    pub fn station_count(&self) -> usize {
        self.departures.len()
    }

    /// Dense index of `station`, or `None` if no connection touches it.
    pub fn station_index(&self, station: StationId) -> Option<StationIndex> {
        self.stations.get(&station).copied()
    }

    /// Returns true if some connection departs from or arrives at `station`.
    pub fn contains_station(&self, station: StationId) -> bool {
        self.stations.contains_key(&station)
    }

    /// Connections departing the station at `index`, in timetable order.
    ///
    /// Empty for indices out of range.
    pub fn departures_at(&self, index: StationIndex) -> &[ConnectionIndex] {
        self.departures
            .get(index.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if departure times never decrease along the timetable.
    pub fn is_departure_ordered(&self) -> bool {
        self.connections
            .windows(2)
            .all(|w| w[0].departure_time <= w[1].departure_time)
    }
}
