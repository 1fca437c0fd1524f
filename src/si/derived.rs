//! Named SI derived units.
//!
//! Coherent mechanical and electrical units, the tag-disambiguated set
//! (hertz/becquerel, gray/sievert), and the affine temperature scales.

use crate::dimension::DimensionVector;
use crate::scale::RationalScale;
use crate::unit::{Tag, UnitDescriptor};

// =============================================================================
// Mechanical units
// =============================================================================

/// Newton (N) - force [kg·m/s²]
pub const NEWTON: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::FORCE);

/// Joule (J) - energy [kg·m²/s²]
pub const JOULE: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::ENERGY);

/// Watt (W) - power [kg·m²/s³]
pub const WATT: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::POWER);

/// Pascal (Pa) - pressure [kg/(m·s²)]
pub const PASCAL: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::PRESSURE);

/// Bar - 10⁵ Pa
pub const BAR: UnitDescriptor =
    UnitDescriptor::scaled(DimensionVector::PRESSURE, RationalScale::pow10(5));

/// Meter per second (m/s) - coherent velocity
pub const METER_PER_SECOND: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::VELOCITY);

// =============================================================================
// Electrical units
// =============================================================================

/// Coulomb (C) - electric charge [A·s]
pub const COULOMB: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::CHARGE);

/// Volt (V) - voltage [kg·m²/(A·s³)]
pub const VOLT: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::VOLTAGE);

/// Ohm (Ω) - resistance [kg·m²/(A²·s³)]
pub const OHM: UnitDescriptor = UnitDescriptor::coherent(DimensionVector::RESISTANCE);

// =============================================================================
// Tag-disambiguated units
//
// Pairwise identical dimension vectors; the tag keeps them apart in
// convertibility checks without entering dimension arithmetic.
// =============================================================================

/// Hertz (Hz) - frequency [1/s], periodic phenomena.
pub const HERTZ: UnitDescriptor =
    UnitDescriptor::coherent(DimensionVector::FREQUENCY).tagged(Tag::new("Hz"));

/// Becquerel (Bq) - radioactivity [1/s], stochastic decay. Dimensionally
/// identical to hertz and deliberately not convertible with it.
pub const BECQUEREL: UnitDescriptor =
    UnitDescriptor::coherent(DimensionVector::FREQUENCY).tagged(Tag::new("Bq"));

/// Gray (Gy) - absorbed dose [m²/s²].
pub const GRAY: UnitDescriptor =
    UnitDescriptor::coherent(DimensionVector::DOSE).tagged(Tag::new("Gy"));

/// Sievert (Sv) - dose equivalent [m²/s²], tag-distinct from gray.
pub const SIEVERT: UnitDescriptor =
    UnitDescriptor::coherent(DimensionVector::DOSE).tagged(Tag::new("Sv"));

// =============================================================================
// Affine temperature scales
//
// coherent = raw × scale + offset, all parts exact rationals:
//   K = °C + 273.15          → scale 1,   offset 27315 × 10⁻²
//   K = (°F + 459.67) × 5/9  → scale 5/9, offset 229835/9 × 10⁻²
// =============================================================================

/// Degree Celsius (°C)
pub const CELSIUS: UnitDescriptor = UnitDescriptor::affine(
    DimensionVector::TEMPERATURE,
    RationalScale::ONE,
    RationalScale::new_raw(27315, 1, -2),
);

/// Degree Fahrenheit (°F)
pub const FAHRENHEIT: UnitDescriptor = UnitDescriptor::affine(
    DimensionVector::TEMPERATURE,
    RationalScale::new_raw(5, 9, 0),
    RationalScale::new_raw(229_835, 9, -2),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::base::{KILOGRAM, METER, SECOND};

    #[test]
    fn test_derived_dimensions_compose() {
        // N = kg·m/s²
        let newton = KILOGRAM
            .mul(&METER)
            .unwrap()
            .div(&SECOND.pow(2).unwrap())
            .unwrap();
        assert_eq!(newton, NEWTON);

        // J = N·m
        assert_eq!(NEWTON.mul(&METER).unwrap(), JOULE);

        // W = J/s
        assert_eq!(JOULE.div(&SECOND).unwrap(), WATT);

        // Pa = N/m²
        assert_eq!(NEWTON.div(&METER.pow(2).unwrap()).unwrap(), PASCAL);

        // V = W/A, Ω = V/A
        let ampere = crate::si::base::AMPERE;
        assert_eq!(WATT.div(&ampere).unwrap(), VOLT);
        assert_eq!(VOLT.div(&ampere).unwrap(), OHM);
    }

    #[test]
    fn test_tagged_pairs_share_dimension_but_not_tag() {
        assert_eq!(HERTZ.dim(), BECQUEREL.dim());
        assert!(!HERTZ.convertible_to(&BECQUEREL));
        assert_eq!(GRAY.dim(), SIEVERT.dim());
        assert!(!GRAY.convertible_to(&SIEVERT));
    }

    #[test]
    fn test_table_tags_are_known() {
        // Tag::KNOWN is what deserialization resolves against, so every
        // tagged table entry must appear there.
        for unit in [HERTZ, BECQUEREL, GRAY, SIEVERT] {
            assert!(Tag::KNOWN.contains(&unit.tag().unwrap()));
        }
    }

    #[test]
    fn test_untagged_frequency_converts_to_neither() {
        let per_second = SECOND.recip().unwrap();
        assert_eq!(per_second.dim(), HERTZ.dim());
        assert!(!per_second.convertible_to(&HERTZ));
        assert!(!per_second.convertible_to(&BECQUEREL));
    }

    #[test]
    fn test_temperature_offsets_are_exact() {
        assert!(CELSIUS.is_affine());
        assert!(FAHRENHEIT.is_affine());
        assert!((CELSIUS.offset().to_f64().unwrap() - 273.15).abs() < 1e-12);
        assert!((FAHRENHEIT.offset().to_f64().unwrap() - 459.67 * 5.0 / 9.0).abs() < 1e-12);
        assert!((FAHRENHEIT.scale().to_f64().unwrap() - 5.0 / 9.0).abs() < 1e-15);
    }

    #[test]
    fn test_bar_to_pascal() {
        let factor = BAR.conversion_factor(&PASCAL).unwrap();
        assert_eq!(factor.to_f64().unwrap(), 1e5);
    }
}
