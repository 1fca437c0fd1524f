//! SI prefixes and commonly used prefixed units.
//!
//! Every prefix is a pure power-of-ten [`RationalScale`]; prefixed units
//! are built from the coherent tables with
//! [`UnitDescriptor::prefixed`](crate::unit::UnitDescriptor::prefixed),
//! which only touches the decimal exponent, so prefix application is exact
//! across the whole quecto…quetta range.

use crate::dimension::DimensionVector;
use crate::scale::RationalScale;
use crate::unit::UnitDescriptor;

use super::base::{KILOGRAM, METER, SECOND};

// =============================================================================
// Prefix multipliers
// =============================================================================

/// quecto (q) - 10⁻³⁰
pub const QUECTO: RationalScale = RationalScale::pow10(-30);
/// ronto (r) - 10⁻²⁷
pub const RONTO: RationalScale = RationalScale::pow10(-27);
/// yocto (y) - 10⁻²⁴
pub const YOCTO: RationalScale = RationalScale::pow10(-24);
/// zepto (z) - 10⁻²¹
pub const ZEPTO: RationalScale = RationalScale::pow10(-21);
/// atto (a) - 10⁻¹⁸
pub const ATTO: RationalScale = RationalScale::pow10(-18);
/// femto (f) - 10⁻¹⁵
pub const FEMTO: RationalScale = RationalScale::pow10(-15);
/// pico (p) - 10⁻¹²
pub const PICO: RationalScale = RationalScale::pow10(-12);
/// nano (n) - 10⁻⁹
pub const NANO: RationalScale = RationalScale::pow10(-9);
/// micro (μ) - 10⁻⁶
pub const MICRO: RationalScale = RationalScale::pow10(-6);
/// milli (m) - 10⁻³
pub const MILLI: RationalScale = RationalScale::pow10(-3);
/// centi (c) - 10⁻²
pub const CENTI: RationalScale = RationalScale::pow10(-2);
/// deci (d) - 10⁻¹
pub const DECI: RationalScale = RationalScale::pow10(-1);
/// deca (da) - 10¹
pub const DECA: RationalScale = RationalScale::pow10(1);
/// hecto (h) - 10²
pub const HECTO: RationalScale = RationalScale::pow10(2);
/// kilo (k) - 10³
pub const KILO: RationalScale = RationalScale::pow10(3);
/// mega (M) - 10⁶
pub const MEGA: RationalScale = RationalScale::pow10(6);
/// giga (G) - 10⁹
pub const GIGA: RationalScale = RationalScale::pow10(9);
/// tera (T) - 10¹²
pub const TERA: RationalScale = RationalScale::pow10(12);
/// peta (P) - 10¹⁵
pub const PETA: RationalScale = RationalScale::pow10(15);
/// exa (E) - 10¹⁸
pub const EXA: RationalScale = RationalScale::pow10(18);
/// zetta (Z) - 10²¹
pub const ZETTA: RationalScale = RationalScale::pow10(21);
/// yotta (Y) - 10²⁴
pub const YOTTA: RationalScale = RationalScale::pow10(24);
/// ronna (R) - 10²⁷
pub const RONNA: RationalScale = RationalScale::pow10(27);
/// quetta (Q) - 10³⁰
pub const QUETTA: RationalScale = RationalScale::pow10(30);

// =============================================================================
// Length
// =============================================================================

/// Kilometer (km) - 10³ m
pub const KILOMETER: UnitDescriptor = METER.prefixed(KILO);
/// Centimeter (cm) - 10⁻² m
pub const CENTIMETER: UnitDescriptor = METER.prefixed(CENTI);
/// Millimeter (mm) - 10⁻³ m
pub const MILLIMETER: UnitDescriptor = METER.prefixed(MILLI);
/// Micrometer (μm) - 10⁻⁶ m
pub const MICROMETER: UnitDescriptor = METER.prefixed(MICRO);
/// Nanometer (nm) - 10⁻⁹ m
pub const NANOMETER: UnitDescriptor = METER.prefixed(NANO);

// =============================================================================
// Mass
// =============================================================================

/// Gram (g) - 10⁻³ kg. Prefixes attach to the gram, names notwithstanding:
/// the coherent mass unit is the kilogram.
pub const GRAM: UnitDescriptor = KILOGRAM.prefixed(MILLI);
/// Milligram (mg) - 10⁻⁶ kg
pub const MILLIGRAM: UnitDescriptor = KILOGRAM.prefixed(MICRO);
/// Microgram (μg) - 10⁻⁹ kg
pub const MICROGRAM: UnitDescriptor = KILOGRAM.prefixed(NANO);
/// Metric ton (t) - 10³ kg
pub const TONNE: UnitDescriptor = KILOGRAM.prefixed(KILO);

// =============================================================================
// Time
// =============================================================================

/// Millisecond (ms) - 10⁻³ s
pub const MILLISECOND: UnitDescriptor = SECOND.prefixed(MILLI);
/// Microsecond (μs) - 10⁻⁶ s
pub const MICROSECOND: UnitDescriptor = SECOND.prefixed(MICRO);
/// Nanosecond (ns) - 10⁻⁹ s
pub const NANOSECOND: UnitDescriptor = SECOND.prefixed(NANO);

/// Minute (min) - 60 s
pub const MINUTE: UnitDescriptor =
    UnitDescriptor::scaled(DimensionVector::TIME, RationalScale::new_raw(6, 1, 1));
/// Hour (h) - 3600 s
pub const HOUR: UnitDescriptor =
    UnitDescriptor::scaled(DimensionVector::TIME, RationalScale::new_raw(36, 1, 2));
/// Day (d) - 86400 s
pub const DAY: UnitDescriptor =
    UnitDescriptor::scaled(DimensionVector::TIME, RationalScale::new_raw(864, 1, 2));

// =============================================================================
// Volume
// =============================================================================

/// Liter (L) - 10⁻³ m³
pub const LITER: UnitDescriptor =
    UnitDescriptor::scaled(DimensionVector::VOLUME, RationalScale::pow10(-3));
/// Deciliter (dL) - 10⁻⁴ m³
pub const DECILITER: UnitDescriptor = LITER.prefixed(DECI);
/// Milliliter (mL) - 10⁻⁶ m³
pub const MILLILITER: UnitDescriptor = LITER.prefixed(MILLI);
/// Microliter (μL) - 10⁻⁹ m³
pub const MICROLITER: UnitDescriptor = LITER.prefixed(MICRO);
