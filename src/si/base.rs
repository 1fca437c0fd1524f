//! SI base units.
//!
//! The coherent units for the 7 SI base quantities, plus the radian for
//! the tracked angle pseudo-dimension. Each is the canonical unit of its
//! dimension: scale 1, offset 0.

use crate::dimension::DimensionVector;
use crate::scale::RationalScale;
use crate::unit::UnitDescriptor;

/// Meter (m) - SI base unit of length.
pub const METER: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::LENGTH);

/// Kilogram (kg) - SI base unit of mass.
///
/// The kilogram, not the gram, is coherent; gram therefore carries scale
/// 10⁻³ (see [`crate::si::prefixes::GRAM`]).
pub const KILOGRAM: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::MASS);

/// Second (s) - SI base unit of time.
pub const SECOND: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::TIME);

/// Ampere (A) - SI base unit of electric current.
pub const AMPERE: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::CURRENT);

/// Kelvin (K) - SI base unit of thermodynamic temperature.
pub const KELVIN: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::TEMPERATURE);

/// Mole (mol) - SI base unit of amount of substance.
pub const MOLE: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::AMOUNT);

/// Candela (cd) - SI base unit of luminous intensity.
pub const CANDELA: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::LUMINOSITY);

/// Radian (rad) - coherent unit of the angle pseudo-dimension.
pub const RADIAN: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::ANGLE);

/// Degree (°) - π/180 radians.
///
/// π is irrational, so this is the one scale in the tables that is a
/// rational approximation: π truncated to 16 significant digits, which is
/// below the `f64` rounding error of any conversion using it.
pub const DEGREE: UnitDescriptor = UnitDescriptor::scaled(
    DimensionVector::ANGLE,
    RationalScale::new_raw(15_707_963_267_948_965, 9, -17),
);

/// Dimensionless unit (pure number).
pub const DIMENSIONLESS: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::DIMENSIONLESS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_units_are_coherent() {
        for unit in [
            METER,
            KILOGRAM,
            SECOND,
            AMPERE,
            KELVIN,
            MOLE,
            CANDELA,
            RADIAN,
            DIMENSIONLESS,
        ] {
            assert!(unit.is_coherent());
            assert_eq!(unit.tag(), None);
            assert!(!unit.is_affine());
        }
    }

    #[test]
    fn test_base_dimensions() {
        assert_eq!(METER.dim(), DimensionVector::LENGTH);
        assert_eq!(KILOGRAM.dim(), DimensionVector::MASS);
        assert_eq!(SECOND.dim(), DimensionVector::TIME);
        assert_eq!(AMPERE.dim(), DimensionVector::CURRENT);
        assert_eq!(KELVIN.dim(), DimensionVector::TEMPERATURE);
        assert_eq!(MOLE.dim(), DimensionVector::AMOUNT);
        assert_eq!(CANDELA.dim(), DimensionVector::LUMINOSITY);
        assert_eq!(RADIAN.dim(), DimensionVector::ANGLE);
        assert!(DIMENSIONLESS.dim().is_dimensionless());
    }

    #[test]
    fn test_degree_scale() {
        let factor = DEGREE.conversion_factor(&RADIAN).unwrap();
        let per_degree = factor.to_f64().unwrap();
        assert!((per_degree - std::f64::consts::PI / 180.0).abs() < 1e-16);

        // 180° is π radians
        assert!((per_degree * 180.0 - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_radian_is_not_dimensionless() {
        assert!(RADIAN.conversion(&DIMENSIONLESS).is_err());
    }
}
