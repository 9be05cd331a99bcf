//! Search configuration for the journey planner.

use std::fmt;
use std::str::FromStr;

/// Which optimisation criterion a search uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Soonest arrival, via a single connection scan.
    EarliestArrival,

    /// Fewest legs, tie-broken by arrival, departure, then time on board.
    #[default]
    FewestConnections,
}

/// Error returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected \"earliest\" or \"fewest\")")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "earliest" | "earliest-arrival" => Ok(Algorithm::EarliestArrival),
            "fewest" | "fewest-connections" => Ok(Algorithm::FewestConnections),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::EarliestArrival => f.write_str("earliest"),
            Algorithm::FewestConnections => f.write_str("fewest"),
        }
    }
}

/// Configuration parameters for journey search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchConfig {
    /// Criterion used to pick the journey.
    pub algorithm: Algorithm,

    /// Maximum number of search states the fewest-connections search may
    /// expand before giving up with its best journey so far.
    /// `None` means unlimited.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(algorithm: Algorithm, max_expansions: Option<usize>) -> Self {
        Self {
            algorithm,
            max_expansions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.algorithm, Algorithm::FewestConnections);
        assert_eq!(config.max_expansions, None);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(Algorithm::EarliestArrival, Some(500));

        assert_eq!(config.algorithm, Algorithm::EarliestArrival);
        assert_eq!(config.max_expansions, Some(500));
    }

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("earliest".parse(), Ok(Algorithm::EarliestArrival));
        assert_eq!(" Earliest-Arrival ".parse(), Ok(Algorithm::EarliestArrival));
        assert_eq!("fewest".parse(), Ok(Algorithm::FewestConnections));
        assert_eq!("FEWEST-CONNECTIONS".parse(), Ok(Algorithm::FewestConnections));
    }

    #[test]
    fn reject_unknown_algorithm() {
        let err = "fastest".parse::<Algorithm>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown algorithm \"fastest\" (expected \"earliest\" or \"fewest\")"
        );
    }

    #[test]
    fn display_parses_back() {
        for algorithm in [Algorithm::EarliestArrival, Algorithm::FewestConnections] {
            assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
        }
    }
}
