//! Error types for subdivision and iteration.

use thiserror::Error;

/// Errors reported by the subdivision engine, the iteration driver and
/// the curve extractor.
///
/// Degenerate (zero-length) segments are not errors; they are counted on
/// [`crate::driver::FractalRun`] and logged as warnings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FractalError {
    /// Iteration count is negative or does not fit in a `u32`.
    #[error("invalid iteration count: {0} (must be between 0 and 4294967295)")]
    InvalidIterationCount(i64),

    /// Flat point array does not hold whole segments.
    #[error("malformed segment array: {len} points (must be an even number)")]
    MalformedInput {
        /// Number of points that were passed in.
        len: usize,
    },

    /// Subdivision rule violates the closure invariant.
    #[error("invalid subdivision rule: {reason}")]
    InvalidRule {
        /// Description of what's wrong with the rule table.
        reason: String,
    },

    /// Output would exceed the configured point limit or overflow.
    #[error("output too large: {input_len} points would grow to {projected} (max {max})")]
    OutputTooLarge {
        /// Number of points before subdivision.
        input_len: usize,
        /// Projected number of points, saturated at `usize::MAX` on overflow.
        projected: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Result type for fractal operations.
pub type FractalResult<T> = std::result::Result<T, FractalError>;

impl FractalError {
    /// Create an invalid rule error.
    #[must_use]
    pub fn invalid_rule(reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            reason: reason.into(),
        }
    }

    /// Create a malformed input error for a point array of length `len`.
    #[must_use]
    pub fn malformed(len: usize) -> Self {
        Self::MalformedInput { len }
    }

    /// Check if this is an invalid iteration count error.
    #[must_use]
    pub fn is_invalid_iteration_count(&self) -> bool {
        matches!(self, Self::InvalidIterationCount(_))
    }

    /// Check if this is a malformed input error.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    /// Check if this is an output size error.
    #[must_use]
    pub fn is_output_too_large(&self) -> bool {
        matches!(self, Self::OutputTooLarge { .. })
    }
}
