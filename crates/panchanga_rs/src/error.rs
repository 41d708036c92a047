//! Unified error type for the facade.

use panchanga_ephem::EphemError;
use panchanga_search::SearchError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PanchangaError {
    /// Malformed coordinates, instant or configuration values.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A value the caller asked for does not exist (e.g. no sunrise).
    #[error("event unavailable: {0}")]
    UnavailableEvent(&'static str),
    #[error("no convergence: {0}")]
    ConvergenceFailure(&'static str),
    /// Festival rules competed for the same day.
    #[error("festival rule ambiguity: {0}")]
    RuleAmbiguity(String),
    /// Config file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<SearchError> for PanchangaError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::NotFound(what) => Self::UnavailableEvent(what),
            SearchError::Ephem(EphemError::KeplerNoConvergence(_)) => {
                Self::ConvergenceFailure("kepler equation")
            }
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
