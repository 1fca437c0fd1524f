//! Magnitudes bound to units.
//!
//! A [`Quantity`] is a pure value type: an `f64` magnitude and the
//! [`UnitDescriptor`] it was constructed with. The unit never changes after
//! construction; conversion and arithmetic produce new quantities. Every
//! operation that needs compatible operands validates and returns the
//! crate's error taxonomy instead of coercing.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul, Neg};

use crate::error::Result;
use crate::unit::UnitDescriptor;

/// A magnitude bound to a fixed unit.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    value: f64,
    unit: UnitDescriptor,
}

impl Quantity {
    /// A raw magnitude in the given unit, stored unchanged.
    pub const fn new(value: f64, unit: UnitDescriptor) -> Self {
        Self { value, unit }
    }

    /// The zero magnitude in the given unit.
    pub const fn zero(unit: UnitDescriptor) -> Self {
        Self::new(0.0, unit)
    }

    /// The raw magnitude.
    pub const fn magnitude(&self) -> f64 {
        self.value
    }

    /// The unit this magnitude is expressed in.
    pub const fn unit(&self) -> UnitDescriptor {
        self.unit
    }

    // ==========================================================================
    // Conversion
    // ==========================================================================

    /// Express this quantity in another unit of the same dimension and tag.
    ///
    /// Affine-aware: `coherent = raw × scale + offset` on the way out of
    /// this unit, then the inverse on the way into the target.
    pub fn convert_to(&self, target: UnitDescriptor) -> Result<Self> {
        if self.unit == target {
            return Ok(*self);
        }
        let conversion = self.unit.conversion(&target)?;
        Ok(Self::new(conversion.apply(self.value)?, target))
    }

    /// Express this quantity in the coherent unit of its dimension. The
    /// unit's tag is preserved.
    pub fn to_coherent(&self) -> Result<Self> {
        self.convert_to(self.unit.to_coherent())
    }

    // ==========================================================================
    // Unit-checked arithmetic
    // ==========================================================================

    /// Sum of two compatible quantities. The right operand is converted
    /// into the left operand's unit; the result keeps the left unit.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        let rhs = other.convert_to(self.unit)?;
        Ok(Self::new(self.value + rhs.value, self.unit))
    }

    /// Difference of two compatible quantities, with the same unit policy
    /// as [`try_add`](Self::try_add).
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        let rhs = other.convert_to(self.unit)?;
        Ok(Self::new(self.value - rhs.value, self.unit))
    }

    /// Product of two quantities, compatible or not.
    ///
    /// Both operands are normalized to coherent form first (affine offsets
    /// applied during normalization), magnitudes multiplied, and the result
    /// is in the coherent product of the operand dimensions with no tag.
    /// This single normalization rule keeps products out of the
    /// scaled-composite-unit swamp: foot × meter is coherent square meters.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        let a = self.to_coherent()?;
        let b = other.to_coherent()?;
        Ok(Self::new(
            a.value * b.value,
            UnitDescriptor::coherent(self.unit.dim().mul(&other.unit.dim())),
        ))
    }

    /// Quotient of two quantities, with the same normalization rule as
    /// [`try_mul`](Self::try_mul).
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        let a = self.to_coherent()?;
        let b = other.to_coherent()?;
        Ok(Self::new(
            a.value / b.value,
            UnitDescriptor::coherent(self.unit.dim().div(&other.unit.dim())),
        ))
    }

    /// Compare two compatible quantities by their coherent magnitudes.
    ///
    /// `Err` for incompatible units or precision loss; `Ok(None)` only when
    /// a magnitude is NaN.
    pub fn try_cmp(&self, other: &Self) -> Result<Option<Ordering>> {
        self.unit.check_convertible(&other.unit)?;
        let a = self.to_coherent()?;
        let b = other.to_coherent()?;
        Ok(a.value.partial_cmp(&b.value))
    }

    // ==========================================================================
    // Float helpers
    // ==========================================================================

    /// Absolute value, unit unchanged.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs(), self.unit)
    }

    /// Minimum of two same-unit views of the operands.
    pub fn min(self, other: Self) -> Result<Self> {
        let rhs = other.convert_to(self.unit)?;
        Ok(Self::new(self.value.min(rhs.value), self.unit))
    }

    /// Maximum, with the same unit policy as [`min`](Self::min).
    pub fn max(self, other: Self) -> Result<Self> {
        let rhs = other.convert_to(self.unit)?;
        Ok(Self::new(self.value.max(rhs.value), self.unit))
    }

    /// Whether the magnitude is finite.
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

// =============================================================================
// Scalar operators (total, unit preserved)
// =============================================================================

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.unit)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::new(self.value / rhs, self.unit)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::new(-self.value, self.unit)
    }
}

// =============================================================================
// Comparison (non-panicking: incompatible operands are unequal/unordered)
// =============================================================================

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.try_cmp(other), Ok(Some(Ordering::Equal)))
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok().flatten()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.dim().is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnitError;
    use crate::si::base::{KELVIN, METER, SECOND};
    use crate::si::derived::{BECQUEREL, CELSIUS, FAHRENHEIT, HERTZ, METER_PER_SECOND};
    use crate::si::prefixes::{HOUR, KILOMETER, MINUTE};

    #[test]
    fn test_meter_kilometer_round_numbers() {
        let m = Quantity::new(1000.0, METER);
        let km = m.convert_to(KILOMETER).unwrap();
        assert_eq!(km.magnitude(), 1.0);

        let back = Quantity::new(1.0, KILOMETER).convert_to(METER).unwrap();
        assert_eq!(back.magnitude(), 1000.0);
    }

    #[test]
    fn test_round_trip_reproduces_magnitude() {
        let original = Quantity::new(37.25, HOUR);
        let via = original
            .convert_to(MINUTE)
            .unwrap()
            .convert_to(HOUR)
            .unwrap();
        assert!((via.magnitude() - 37.25).abs() < 1e-10);
    }

    #[test]
    fn test_affine_temperature_conversions() {
        let f = Quantity::new(32.0, FAHRENHEIT);
        let c = f.convert_to(CELSIUS).unwrap();
        assert!(c.magnitude().abs() < 1e-9);

        let boiling = Quantity::new(100.0, CELSIUS);
        let f = boiling.convert_to(FAHRENHEIT).unwrap();
        assert!((f.magnitude() - 212.0).abs() < 1e-9);

        let k = boiling.convert_to(KELVIN).unwrap();
        assert!((k.magnitude() - 373.15).abs() < 1e-9);
    }

    #[test]
    fn test_add_converts_right_operand() {
        let total = Quantity::new(1.0, KILOMETER)
            .try_add(&Quantity::new(500.0, METER))
            .unwrap();
        assert_eq!(total.unit(), KILOMETER);
        assert!((total.magnitude() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_add_incompatible_dimensions() {
        let err = Quantity::new(1.0, METER)
            .try_add(&Quantity::new(1.0, SECOND))
            .unwrap_err();
        assert!(matches!(err, UnitError::IncompatibleDimension { .. }));
    }

    #[test]
    fn test_mul_normalizes_to_coherent() {
        let speed = Quantity::new(10.0, METER_PER_SECOND);
        let time = Quantity::new(2.0, SECOND);
        let distance = speed.try_mul(&time).unwrap();
        assert_eq!(distance.unit(), METER);
        assert_eq!(distance.magnitude(), 20.0);
    }

    #[test]
    fn test_mul_of_scaled_operands() {
        // km × km lands in coherent square meters, not a scaled composite
        let area = Quantity::new(2.0, KILOMETER)
            .try_mul(&Quantity::new(3.0, KILOMETER))
            .unwrap();
        assert!(area.unit().is_coherent());
        assert_eq!(area.unit().dim(), crate::DimensionVector::AREA);
        assert!((area.magnitude() - 6e6).abs() < 1e-4);
    }

    #[test]
    fn test_div_produces_coherent_quotient() {
        let speed = Quantity::new(180.0, KILOMETER)
            .try_div(&Quantity::new(2.0, HOUR))
            .unwrap();
        assert_eq!(speed.unit(), METER_PER_SECOND);
        assert!((speed.magnitude() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_affine_operands_in_products() {
        // Offsets are applied during normalization, so products of affine
        // quantities are defined (ideal-gas style temperature products).
        let t = Quantity::new(0.0, CELSIUS);
        let d = Quantity::new(2.0, METER);
        let product = t.try_mul(&d).unwrap();
        assert!((product.magnitude() - 546.3).abs() < 1e-9);
        assert!(product.unit().is_coherent());
    }

    #[test]
    fn test_tagged_units_do_not_mix() {
        let hz = Quantity::new(5.0, HERTZ);
        let bq = Quantity::new(5.0, BECQUEREL);
        assert!(matches!(
            hz.convert_to(BECQUEREL).unwrap_err(),
            UnitError::IncompatibleTag { .. }
        ));
        assert_ne!(hz, bq);
        assert_eq!(hz.partial_cmp(&bq), None);
    }

    #[test]
    fn test_comparison_across_scales() {
        let m = Quantity::new(1500.0, METER);
        let km = Quantity::new(1.5, KILOMETER);
        assert_eq!(m, km);
        assert!(Quantity::new(2.0, KILOMETER) > m);
        assert!(Quantity::new(999.0, METER) < km);
    }

    #[test]
    fn test_comparison_incompatible_is_unordered() {
        let m = Quantity::new(1.0, METER);
        let s = Quantity::new(1.0, SECOND);
        assert_ne!(m, s);
        assert_eq!(m.partial_cmp(&s), None);
        assert!(matches!(
            m.try_cmp(&s),
            Err(UnitError::IncompatibleDimension { .. })
        ));
    }

    #[test]
    fn test_scalar_operators() {
        let d = Quantity::new(10.0, METER);
        assert_eq!((d * 2.0).magnitude(), 20.0);
        assert_eq!((d / 4.0).magnitude(), 2.5);
        assert_eq!((-d).magnitude(), -10.0);
        assert_eq!((-d).unit(), METER);
    }

    #[test]
    fn test_float_helpers() {
        let a = Quantity::new(-3.0, METER);
        assert_eq!(a.abs().magnitude(), 3.0);

        let b = Quantity::new(0.5, KILOMETER);
        let min = a.abs().min(b).unwrap();
        assert_eq!(min.unit(), METER);
        assert_eq!(min.magnitude(), 3.0);

        let max = b.max(Quantity::new(2000.0, METER)).unwrap();
        assert_eq!(max.unit(), KILOMETER);
        assert!((max.magnitude() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_and_display() {
        let z = Quantity::zero(SECOND);
        assert_eq!(z.magnitude(), 0.0);
        assert_eq!(format!("{}", Quantity::new(9.8, METER)), "9.8 L");
    }
}
