//! Dimension vectors over the base physical quantities.
//!
//! Every unit measures some combination of the 7 SI base quantities, plus
//! plane angle carried as a pseudo-dimension (dimensionless in SI, but
//! tracked so radians stay distinct from pure numbers). Exponents are exact
//! rationals, so taking roots of dimensions never needs an approximation.

use std::fmt;

use num_rational::Ratio;
use num_traits::Zero;

use crate::error::{Result, UnitError};

/// Rational exponent of a single base quantity.
pub type Exponent = Ratio<i32>;

/// An immutable tuple of rational exponents, one per base quantity.
///
/// Component order: length [L], mass [M], time [T], electric current [I],
/// thermodynamic temperature [Θ], amount of substance [N], luminous
/// intensity [J], plane angle [A].
///
/// Derived dimensions are products of powers:
/// - Velocity = L T⁻¹
/// - Force = M L T⁻²
/// - Frequency = T⁻¹
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionVector {
    components: [Exponent; 8],
}

impl DimensionVector {
    // ==========================================================================
    // Base dimensions
    // ==========================================================================

    /// Dimensionless (pure number), the all-zero vector.
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0, 0);

    /// Length [L] - meter
    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0, 0, 0, 0);

    /// Mass [M] - kilogram
    pub const MASS: Self = Self::new(0, 1, 0, 0, 0, 0, 0, 0);

    /// Time [T] - second
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0, 0, 0);

    /// Electric current [I] - ampere
    pub const CURRENT: Self = Self::new(0, 0, 0, 1, 0, 0, 0, 0);

    /// Temperature [Θ] - kelvin
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 0, 1, 0, 0, 0);

    /// Amount of substance [N] - mole
    pub const AMOUNT: Self = Self::new(0, 0, 0, 0, 0, 1, 0, 0);

    /// Luminous intensity [J] - candela
    pub const LUMINOSITY: Self = Self::new(0, 0, 0, 0, 0, 0, 1, 0);

    /// Plane angle [A] - radian (pseudo-dimension)
    pub const ANGLE: Self = Self::new(0, 0, 0, 0, 0, 0, 0, 1);

    // ==========================================================================
    // Common derived dimensions
    // ==========================================================================

    /// Area [L²]
    pub const AREA: Self = Self::new(2, 0, 0, 0, 0, 0, 0, 0);

    /// Volume [L³]
    pub const VOLUME: Self = Self::new(3, 0, 0, 0, 0, 0, 0, 0);

    /// Velocity [L T⁻¹]
    pub const VELOCITY: Self = Self::new(1, 0, -1, 0, 0, 0, 0, 0);

    /// Acceleration [L T⁻²]
    pub const ACCELERATION: Self = Self::new(1, 0, -2, 0, 0, 0, 0, 0);

    /// Force [M L T⁻²] - newton
    pub const FORCE: Self = Self::new(1, 1, -2, 0, 0, 0, 0, 0);

    /// Energy [M L² T⁻²] - joule
    pub const ENERGY: Self = Self::new(2, 1, -2, 0, 0, 0, 0, 0);

    /// Power [M L² T⁻³] - watt
    pub const POWER: Self = Self::new(2, 1, -3, 0, 0, 0, 0, 0);

    /// Pressure [M L⁻¹ T⁻²] - pascal
    pub const PRESSURE: Self = Self::new(-1, 1, -2, 0, 0, 0, 0, 0);

    /// Frequency [T⁻¹] - hertz (and becquerel, distinguished by tag)
    pub const FREQUENCY: Self = Self::new(0, 0, -1, 0, 0, 0, 0, 0);

    /// Specific energy [L² T⁻²] - gray and sievert, distinguished by tag
    pub const DOSE: Self = Self::new(2, 0, -2, 0, 0, 0, 0, 0);

    /// Electric charge [I T] - coulomb
    pub const CHARGE: Self = Self::new(0, 0, 1, 1, 0, 0, 0, 0);

    /// Voltage [M L² T⁻³ I⁻¹] - volt
    pub const VOLTAGE: Self = Self::new(2, 1, -3, -1, 0, 0, 0, 0);

    /// Resistance [M L² T⁻³ I⁻²] - ohm
    pub const RESISTANCE: Self = Self::new(2, 1, -3, -2, 0, 0, 0, 0);

    /// Angular velocity [A T⁻¹]
    pub const ANGULAR_VELOCITY: Self = Self::new(0, 0, -1, 0, 0, 0, 0, 1);

    // ==========================================================================
    // Constructors
    // ==========================================================================

    /// Create a dimension vector from integer exponents, by far the common
    /// case for unit definitions.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        length: i32,
        mass: i32,
        time: i32,
        current: i32,
        temperature: i32,
        amount: i32,
        luminosity: i32,
        angle: i32,
    ) -> Self {
        Self {
            components: [
                Ratio::new_raw(length, 1),
                Ratio::new_raw(mass, 1),
                Ratio::new_raw(time, 1),
                Ratio::new_raw(current, 1),
                Ratio::new_raw(temperature, 1),
                Ratio::new_raw(amount, 1),
                Ratio::new_raw(luminosity, 1),
                Ratio::new_raw(angle, 1),
            ],
        }
    }

    /// Create a dimension vector from explicitly rational exponents.
    ///
    /// Rejects any component with a zero denominator.
    pub fn from_exponents(components: [Exponent; 8]) -> Result<Self> {
        for c in &components {
            if *c.denom() == 0 {
                return Err(UnitError::DivisionByZero);
            }
        }
        Ok(Self {
            components: components.map(|c| c.reduced()),
        })
    }

    // ==========================================================================
    // Operations
    // ==========================================================================

    /// Multiply dimensions (component-wise sum of exponents).
    ///
    /// Used when multiplying quantities: [A] × [B] = [A × B]
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            components: std::array::from_fn(|i| self.components[i] + other.components[i]),
        }
    }

    /// Divide dimensions (component-wise difference of exponents).
    ///
    /// Used when dividing quantities: [A] / [B] = [A / B]
    #[must_use]
    pub fn div(&self, other: &Self) -> Self {
        Self {
            components: std::array::from_fn(|i| self.components[i] - other.components[i]),
        }
    }

    /// Reciprocal (negate all exponents).
    ///
    /// [1/A] = [A]⁻¹
    #[must_use]
    pub fn recip(&self) -> Self {
        Self {
            components: self.components.map(|c| -c),
        }
    }

    /// Raise to an integer power (scale all exponents).
    ///
    /// [A]ⁿ
    #[must_use]
    pub fn pow(&self, n: i32) -> Self {
        Self {
            components: self.components.map(|c| c * n),
        }
    }

    /// n-th root (divide all exponents by n).
    ///
    /// Exact for every dimension thanks to rational exponents; only n = 0
    /// is rejected. `root(2)` of area is length, `root(2)` of length is the
    /// L^½ vector.
    pub fn root(&self, n: i32) -> Result<Self> {
        if n == 0 {
            return Err(UnitError::DivisionByZero);
        }
        Ok(Self {
            components: self.components.map(|c| c / n),
        })
    }

    // ==========================================================================
    // Predicates and accessors
    // ==========================================================================

    /// Check if dimensionless (all-zero vector).
    pub fn is_dimensionless(&self) -> bool {
        self.components.iter().all(Zero::is_zero)
    }

    /// Exact component-wise equality. Same as `==`; kept as a named
    /// operation for call sites that read better with it.
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Length exponent [L]
    pub fn length(&self) -> Exponent {
        self.components[0]
    }

    /// Mass exponent [M]
    pub fn mass(&self) -> Exponent {
        self.components[1]
    }

    /// Time exponent [T]
    pub fn time(&self) -> Exponent {
        self.components[2]
    }

    /// Electric current exponent [I]
    pub fn current(&self) -> Exponent {
        self.components[3]
    }

    /// Temperature exponent [Θ]
    pub fn temperature(&self) -> Exponent {
        self.components[4]
    }

    /// Amount of substance exponent [N]
    pub fn amount(&self) -> Exponent {
        self.components[5]
    }

    /// Luminous intensity exponent [J]
    pub fn luminosity(&self) -> Exponent {
        self.components[6]
    }

    /// Plane angle exponent [A]
    pub fn angle(&self) -> Exponent {
        self.components[7]
    }

    /// All eight exponents in component order.
    pub fn exponents(&self) -> [Exponent; 8] {
        self.components
    }

    // ==========================================================================
    // Named dimension detection
    // ==========================================================================

    /// Get the name of this dimension if it matches a known one.
    pub fn name(&self) -> Option<&'static str> {
        const NAMED: [(DimensionVector, &str); 19] = [
            (DimensionVector::DIMENSIONLESS, "dimensionless"),
            (DimensionVector::LENGTH, "length"),
            (DimensionVector::MASS, "mass"),
            (DimensionVector::TIME, "time"),
            (DimensionVector::CURRENT, "electric current"),
            (DimensionVector::TEMPERATURE, "temperature"),
            (DimensionVector::AMOUNT, "amount of substance"),
            (DimensionVector::LUMINOSITY, "luminous intensity"),
            (DimensionVector::ANGLE, "plane angle"),
            (DimensionVector::AREA, "area"),
            (DimensionVector::VOLUME, "volume"),
            (DimensionVector::VELOCITY, "velocity"),
            (DimensionVector::ACCELERATION, "acceleration"),
            (DimensionVector::FORCE, "force"),
            (DimensionVector::ENERGY, "energy"),
            (DimensionVector::POWER, "power"),
            (DimensionVector::PRESSURE, "pressure"),
            (DimensionVector::FREQUENCY, "frequency"),
            (DimensionVector::CHARGE, "electric charge"),
        ];
        NAMED
            .iter()
            .find(|(dim, _)| dim == self)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        const SYMBOLS: [&str; 8] = ["L", "M", "T", "I", "Θ", "N", "J", "A"];

        let mut num: Vec<String> = Vec::new();
        let mut den: Vec<String> = Vec::new();

        for (sym, exp) in SYMBOLS.iter().zip(self.components.iter()) {
            if exp.is_zero() {
                continue;
            }
            if exp > &Exponent::zero() {
                num.push(render_power(sym, *exp));
            } else {
                den.push(render_power(sym, -*exp));
            }
        }

        let num_str = if num.is_empty() {
            "1".to_string()
        } else {
            num.join(" ")
        };

        if den.is_empty() {
            write!(f, "{}", num_str)
        } else {
            write!(f, "{} / {}", num_str, den.join(" "))
        }
    }
}

/// Render one positive exponent: plain symbol for 1, superscripts for other
/// integers, `sym^(n/d)` for fractional exponents.
fn render_power(sym: &str, exp: Exponent) -> String {
    if exp == Exponent::new_raw(1, 1) {
        sym.to_string()
    } else if exp.is_integer() {
        format!("{}{}", sym, superscript(*exp.numer()))
    } else {
        format!("{}^({}/{})", sym, exp.numer(), exp.denom())
    }
}

/// Convert an integer to a superscript string.
fn superscript(n: i32) -> String {
    let mut result = String::new();
    if n < 0 {
        result.push('⁻');
    }
    for d in n.unsigned_abs().to_string().chars() {
        result.push(match d {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            _ => d,
        });
    }
    result
}
