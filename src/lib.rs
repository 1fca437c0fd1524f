//! Dimensional analysis and exact unit conversion.
//!
//! Guarantees that only dimensionally compatible quantities combine, and
//! computes exact conversion factors between units sharing a dimension.
//! Prevents errors like the Mars Climate Orbiter unit mismatch without
//! floating-point drift: all unit composition happens in rational
//! arithmetic, and magnitudes meet floating point only at the final step.
//!
//! # Key pieces
//!
//! - [`DimensionVector`]: rational exponents over the base quantities
//! - [`RationalScale`]: exact `num/den × 10^exp` scale factors
//! - [`UnitDescriptor`]: dimension + scale + affine offset + tag
//! - [`Quantity`]: a magnitude bound to a unit, with checked arithmetic
//!
//! # Example
//!
//! ```
//! use mensura::si::base::METER;
//! use mensura::si::prefixes::KILOMETER;
//! use mensura::Quantity;
//!
//! # fn main() -> mensura::Result<()> {
//! let distance = Quantity::new(1500.0, METER);
//! let km = distance.convert_to(KILOMETER)?;
//! assert!((km.magnitude() - 1.5).abs() < 1e-12);
//!
//! // Unit mismatches are errors, never silent coercions:
//! use mensura::si::base::SECOND;
//! assert!(distance.try_add(&Quantity::new(1.0, SECOND)).is_err());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dimension;
pub mod error;
pub mod quantity;
pub mod scale;
pub mod si;
pub mod unit;

// Re-exports
pub use dimension::{DimensionVector, Exponent};
pub use error::{Result, UnitError};
pub use quantity::Quantity;
pub use scale::{pow10_f64, RationalScale, MAX_EXP10, MIN_EXP10};
pub use unit::{Conversion, Tag, UnitDescriptor};

/// Prelude for common imports.
pub mod prelude {
    pub use super::dimension::DimensionVector;
    pub use super::error::{Result, UnitError};
    pub use super::quantity::Quantity;
    pub use super::scale::RationalScale;
    pub use super::unit::{Conversion, Tag, UnitDescriptor};

    // SI base units
    pub use super::si::base::{
        AMPERE, CANDELA, DEGREE, DIMENSIONLESS, KELVIN, KILOGRAM, METER, MOLE, RADIAN, SECOND,
    };

    // SI prefixes and prefixed units
    pub use super::si::prefixes::{
        CENTI, CENTIMETER, DAY, DECI, GIGA, GRAM, HOUR, KILO, KILOMETER, LITER, MEGA, MICRO,
        MICROGRAM, MILLI, MILLIGRAM, MILLILITER, MILLIMETER, MILLISECOND, MINUTE, NANO, TONNE,
    };

    // SI derived units
    pub use super::si::derived::{
        BAR, BECQUEREL, CELSIUS, COULOMB, FAHRENHEIT, GRAY, HERTZ, JOULE, METER_PER_SECOND,
        NEWTON, OHM, PASCAL, SIEVERT, VOLT, WATT,
    };
}
