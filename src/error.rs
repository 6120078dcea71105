//! Error types for boxlap.

use thiserror::Error;

/// Result type for boxlap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for boxlap operations.
///
/// Every variant is a shape error: the only failure mode of this crate is
/// malformed input geometry. Degenerate boxes (`lower > upper` on some axis)
/// are valid inputs that contribute zero extent, and zero-union or zero-area
/// divisions are guarded to return 0.0; neither is an error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Two box sets disagree on spatial dimensionality.
    #[error("dimension mismatch: left set has {left} axes, right set has {right}")]
    DimensionMismatch {
        /// Dimensionality of the left-hand set.
        left: usize,
        /// Dimensionality of the right-hand set.
        right: usize,
    },

    /// A coordinate buffer does not conform to the expected layout.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// A box set with zero spatial dimensions.
    #[error("box sets must have at least one spatial dimension")]
    EmptyDimension,
}

impl Error {
    /// Create an invalid layout error.
    pub fn invalid_layout(msg: impl Into<String>) -> Self {
        Error::InvalidLayout(msg.into())
    }
}
