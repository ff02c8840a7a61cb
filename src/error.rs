//! Error type for network construction and allocation setup.

use thiserror::Error;

/// Errors raised when input data violates the network contract.
///
/// Algorithms themselves never fail: unreachable locations and unmet demand
/// are ordinary outcomes, not errors.
#[derive(Debug, Error)]
pub enum ReliefError {
    /// The network has no locations.
    #[error("network must contain at least one location")]
    EmptyNetwork,

    /// A location index lies outside `[0, len)`.
    #[error("location index {index} out of range for {len} locations")]
    LocationOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of locations.
        len: usize,
    },

    /// Two locations share the same display name.
    #[error("duplicate location name `{0}`")]
    DuplicateName(String),

    /// A name does not match any location.
    #[error("unknown location `{0}`")]
    UnknownLocation(String),

    /// A per-location vector has the wrong length.
    #[error("{field} has {found} entries, expected {expected}")]
    LengthMismatch {
        /// Which input was mis-sized.
        field: &'static str,
        /// Number of locations.
        expected: usize,
        /// Entries actually supplied.
        found: usize,
    },

    /// JSON (de)serialization failed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReliefError>;
