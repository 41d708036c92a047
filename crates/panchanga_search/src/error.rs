//! Error types for search and report assembly.

use panchanga_ephem::EphemError;
use panchanga_time::TimeError;
use panchanga_vedic_base::VedicError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error(transparent)]
    Ephem(#[from] EphemError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// Search configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// Observer coordinates out of range or non-finite.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Instant is NaN or infinite.
    #[error("non-finite instant: {0}")]
    NonFinite(&'static str),
    /// A required event was not found inside its search window.
    #[error("event not found: {0}")]
    NotFound(&'static str),
}
