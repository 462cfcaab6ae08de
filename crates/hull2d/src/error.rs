//! Error types for hull construction and point parsing.
//!
//! Degenerate inputs (fewer than three distinct points, all points collinear)
//! are not errors: they come back as a degenerate [`crate::HullShape`]. Only
//! caller contract violations surface here.

use thiserror::Error;

/// Errors that can occur when invoking the hull core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HullError {
    /// The algorithm selector did not name a known algorithm.
    #[error("invalid algorithm: {name:?} (expected gift-wrapping or angular-sweep)")]
    InvalidAlgorithm {
        /// The unrecognized selector
        name: String,
    },

    /// An input point has a NaN or infinite coordinate.
    #[error("point #{index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Position of the offending point in the input
        index: usize,
    },

    /// A token of the text point format is not a number (or not a count).
    #[error("cannot parse {token:?} as a number")]
    Parse {
        /// The offending token
        token: String,
    },
}

/// A specialized `Result` type for hull operations.
pub type Result<T> = std::result::Result<T, HullError>;
