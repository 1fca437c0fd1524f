//! Error taxonomy for the unit algebra.
//!
//! Unit mismatches are programmer errors, not transient failures: there is
//! no retry semantic anywhere in this crate. Every fallible operation
//! reports immediately through [`UnitError`] instead of coercing, truncating
//! or producing NaN.

use thiserror::Error;

use crate::dimension::DimensionVector;
use crate::unit::Tag;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, UnitError>;

/// Errors produced by unit construction, conversion and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The dimension vectors of the two units differ.
    #[error("incompatible dimensions: {from} vs {to}")]
    IncompatibleDimension {
        /// Dimension of the source unit.
        from: DimensionVector,
        /// Dimension of the target unit.
        to: DimensionVector,
    },

    /// Dimension vectors match but the disambiguation tags differ
    /// (e.g. hertz vs becquerel). Deliberately distinct from
    /// [`UnitError::IncompatibleDimension`]: the units look alike
    /// dimensionally and must still not be treated as convertible.
    #[error("incompatible unit tags: {from:?} vs {to:?}")]
    IncompatibleTag {
        /// Tag of the source unit.
        from: Option<Tag>,
        /// Tag of the target unit.
        to: Option<Tag>,
    },

    /// An offset-bearing (affine) unit was used where only multiplicative
    /// units are defined: products, quotients, reciprocals, powers and
    /// single-scalar conversion factors.
    #[error("affine units cannot be composed or reduced to a scalar factor")]
    AffineComposition,

    /// A rational scale left the supported range: its decimal exponent
    /// moved outside ±30, or numerator/denominator arithmetic overflowed
    /// `i64`. Never silently wrapped or clamped.
    #[error("rational scale exceeded the supported precision range (10^{exp10})")]
    PrecisionLoss {
        /// The decimal exponent in play when the range was exceeded.
        exp10: i32,
    },

    /// Division by a zero scale, or a zero-order root of a dimension.
    #[error("division by zero in rational scale arithmetic")]
    DivisionByZero,
}
