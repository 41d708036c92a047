//! Error types for ephemeris queries.

use panchanga_time::TimeError;
use thiserror::Error;

use crate::body::Body;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemError {
    /// An input Julian Date or coordinate was NaN or infinite.
    #[error("non-finite input: {0}")]
    NonFinite(&'static str),
    /// The gateway has no theory for this body.
    #[error("{0:?} is not supported by this gateway")]
    UnsupportedBody(Body),
    /// Kepler's equation did not converge.
    #[error("Kepler equation did not converge for {0:?}")]
    KeplerNoConvergence(Body),
    #[error(transparent)]
    Time(#[from] TimeError),
}
