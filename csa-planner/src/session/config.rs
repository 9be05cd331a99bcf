//! Session configuration, read from the environment.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::planner::{Algorithm, SearchConfig, UnknownAlgorithm};

/// Selects the search algorithm (`fewest` or `earliest`).
pub const ALGORITHM_VAR: &str = "CSA_ALGORITHM";

/// Caps the fewest-connections search at this many expansions.
pub const MAX_EXPANSIONS_VAR: &str = "CSA_MAX_EXPANSIONS";

/// Selects the result format (`text` or `json`).
pub const OUTPUT_VAR: &str = "CSA_OUTPUT";

/// Loads the timetable from this file instead of the head of the input.
pub const TIMETABLE_VAR: &str = "CSA_TIMETABLE";

/// How results are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per leg, `NO_SOLUTION` when there is none, blank line after.
    #[default]
    Text,

    /// One JSON object per query.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownOutput(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Algorithm name not recognised
    #[error("CSA_ALGORITHM: {0}")]
    Algorithm(#[from] UnknownAlgorithm),

    /// Expansion budget is not a positive integer
    #[error("CSA_MAX_EXPANSIONS: expected a positive integer, got {0:?}")]
    InvalidBudget(String),

    /// Output format not recognised
    #[error("CSA_OUTPUT: unknown output format {0:?} (expected \"text\" or \"json\")")]
    UnknownOutput(String),
}

/// Everything a query session needs besides its input and output streams.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Search parameters.
    pub search: SearchConfig,

    /// Result format.
    pub output: OutputFormat,

    /// Timetable file; `None` reads the timetable from the session input.
    pub timetable_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let algorithm = match non_empty(ALGORITHM_VAR) {
            Some(value) => value.parse::<Algorithm>()?,
            None => Algorithm::default(),
        };

        let max_expansions = match non_empty(MAX_EXPANSIONS_VAR) {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err(ConfigError::InvalidBudget(value)),
            },
            None => None,
        };

        let output = match non_empty(OUTPUT_VAR) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            search: SearchConfig::new(algorithm, max_expansions),
            output,
            timetable_path: non_empty(TIMETABLE_VAR).map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<SessionConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SessionConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_vars(&[]).unwrap();

        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.search.algorithm, Algorithm::FewestConnections);
        assert_eq!(config.search.max_expansions, None);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.timetable_path, None);
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = from_vars(&[(ALGORITHM_VAR, ""), (MAX_EXPANSIONS_VAR, "  ")]).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn all_values_set() {
        let config = from_vars(&[
            (ALGORITHM_VAR, "earliest"),
            (MAX_EXPANSIONS_VAR, "250000"),
            (OUTPUT_VAR, "JSON"),
            (TIMETABLE_VAR, "/data/timetable.txt"),
        ])
        .unwrap();

        assert_eq!(config.search.algorithm, Algorithm::EarliestArrival);
        assert_eq!(config.search.max_expansions, Some(250_000));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(
            config.timetable_path,
            Some(PathBuf::from("/data/timetable.txt"))
        );
    }

    #[test]
    fn bad_algorithm() {
        let err = from_vars(&[(ALGORITHM_VAR, "quickest")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CSA_ALGORITHM: unknown algorithm \"quickest\" (expected \"earliest\" or \"fewest\")"
        );
    }

    #[test]
    fn bad_budget() {
        for value in ["0", "-5", "lots"] {
            let err = from_vars(&[(MAX_EXPANSIONS_VAR, value)]).unwrap_err();
            assert_eq!(err, ConfigError::InvalidBudget(value.to_string()));
        }
    }

    #[test]
    fn bad_output() {
        let err = from_vars(&[(OUTPUT_VAR, "xml")]).unwrap_err();
        assert_eq!(err, ConfigError::UnknownOutput("xml".to_string()));
    }

    #[test]
    fn output_display_parses_back() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
    }
}
