//! Error types for Vedic calculations.

use thiserror::Error;

use crate::dasha::MAX_DASHA_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Requested dasha depth outside 1..=MAX_DASHA_DEPTH.
    #[error("dasha depth {0} is outside 1..={max}", max = MAX_DASHA_DEPTH)]
    InvalidDashaDepth(u8),
    /// An input Julian Date or longitude was NaN or infinite.
    #[error("non-finite input: {0}")]
    NonFinite(&'static str),
}
