//! Exact rational scale factors.
//!
//! A [`RationalScale`] is `num/den × 10^exp10` with `num/den` kept in lowest
//! terms and the decimal exponent stored separately, so the prefix range
//! (quecto 10⁻³⁰ through quetta 10³⁰) never pushes the fraction itself
//! through huge integers. Repeated conversions stay drift-free because all
//! combination happens in rational arithmetic; only the final [`to_f64`]
//! touches floating point.
//!
//! [`to_f64`]: RationalScale::to_f64

use std::fmt;

use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::error::{Result, UnitError};

/// Smallest supported decimal exponent.
pub const MIN_EXP10: i32 = -30;

/// Largest supported decimal exponent.
pub const MAX_EXP10: i32 = 30;

/// Powers of ten for the supported exponent range, 10⁻³⁰ … 10³⁰.
///
/// Float literals are correctly rounded, so each entry is exact to the last
/// representable bit. This table is the only place rational scales meet
/// floating point.
const POW10: [f64; 61] = [
    1e-30, 1e-29, 1e-28, 1e-27, 1e-26, 1e-25, 1e-24, 1e-23, 1e-22, 1e-21, 1e-20, 1e-19, 1e-18,
    1e-17, 1e-16, 1e-15, 1e-14, 1e-13, 1e-12, 1e-11, 1e-10, 1e-9, 1e-8, 1e-7, 1e-6, 1e-5, 1e-4,
    1e-3, 1e-2, 1e-1, 1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13,
    1e14, 1e15, 1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22, 1e23, 1e24, 1e25, 1e26, 1e27, 1e28,
    1e29, 1e30,
];

/// Look up 10^exp as an `f64`, exact for the supported range.
///
/// Exponents outside ±30 are a flagged precision-loss condition, never a
/// silent wrap or clamp.
pub fn pow10_f64(exp: i32) -> Result<f64> {
    if !(MIN_EXP10..=MAX_EXP10).contains(&exp) {
        return Err(UnitError::PrecisionLoss { exp10: exp });
    }
    Ok(POW10[(exp - MIN_EXP10) as usize])
}

/// An exact rational number with a separate decimal exponent:
/// `num/den × 10^exp10`.
///
/// Canonical-form invariant, maintained by every constructor and operation:
/// `den > 0`, `gcd(num, den) == 1`, `den` coprime to 10, `num` not
/// divisible by 10, and zero stored as `0/1 × 10^0`. This form is unique
/// for a given value (powers of 2 and 5 are rebalanced between fraction
/// and exponent), so structural equality is value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RationalScale {
    num: i64,
    den: i64,
    exp10: i32,
}

impl RationalScale {
    /// The multiplicative identity, `1`.
    pub const ONE: Self = Self::new_raw(1, 1, 0);

    /// The additive identity, `0`.
    pub const ZERO: Self = Self::new_raw(0, 1, 0);

    /// Build a scale from parts already in canonical form.
    ///
    /// Used for `const` unit tables; the caller guarantees lowest terms, a
    /// positive denominator coprime to 10, and a numerator not divisible by
    /// 10. Use [`RationalScale::new`] when the parts are not known to be
    /// canonical.
    pub const fn new_raw(num: i64, den: i64, exp10: i32) -> Self {
        Self { num, den, exp10 }
    }

    /// Build a scale, reducing to canonical form.
    ///
    /// Rejects a zero denominator.
    pub fn new(num: i64, den: i64, exp10: i32) -> Result<Self> {
        if den == 0 {
            return Err(UnitError::DivisionByZero);
        }
        Ok(Self::canonical(Ratio::new(num, den), exp10))
    }

    /// A pure power of ten, `10^exp`. This is the shape of every SI prefix.
    pub const fn pow10(exp: i32) -> Self {
        Self::new_raw(1, 1, exp)
    }

    /// A scale from a plain integer.
    pub fn from_integer(n: i64) -> Self {
        Self::canonical(Ratio::from_integer(n), 0)
    }

    /// Restore the canonical-form invariant after rational arithmetic:
    /// powers of 2 and 5 rebalance between the (already reduced) ratio and
    /// the decimal exponent, and zero collapses to `0/1 × 10^0`.
    fn canonical(ratio: Ratio<i64>, exp10: i32) -> Self {
        if ratio.is_zero() {
            return Self::ZERO;
        }
        match Self::rebalance(*ratio.numer() as i128, *ratio.denom() as i128, exp10) {
            Some(scale) => scale,
            // Folding the surplus twos or fives back into the numerator
            // overflowed. Only reachable through 2^k or 5^k factors far
            // beyond any unit table; keep the reduced form with whole tens
            // stripped, trading canonical uniqueness for exactness.
            None => {
                let mut num = *ratio.numer();
                let mut den = *ratio.denom();
                let mut exp10 = exp10;
                while num % 10 == 0 {
                    num /= 10;
                    exp10 += 1;
                }
                while den % 10 == 0 {
                    den /= 10;
                    exp10 -= 1;
                }
                Self { num, den, exp10 }
            }
        }
    }

    /// Strip every factor of 2 and 5 from both parts, then fold them back
    /// as whole tens into the exponent plus a surplus of twos or fives in
    /// the numerator. The result is the unique canonical form.
    fn rebalance(mut num: i128, mut den: i128, exp10: i32) -> Option<Self> {
        let mut twos = exp10;
        let mut fives = exp10;
        while num % 2 == 0 {
            num /= 2;
            twos = twos.checked_add(1)?;
        }
        while num % 5 == 0 {
            num /= 5;
            fives = fives.checked_add(1)?;
        }
        while den % 2 == 0 {
            den /= 2;
            twos = twos.checked_sub(1)?;
        }
        while den % 5 == 0 {
            den /= 5;
            fives = fives.checked_sub(1)?;
        }
        let exp10 = twos.min(fives);
        for _ in exp10..twos {
            num = num.checked_mul(2)?;
        }
        for _ in exp10..fives {
            num = num.checked_mul(5)?;
        }
        Some(Self {
            num: i64::try_from(num).ok()?,
            den: i64::try_from(den).ok()?,
            exp10,
        })
    }

    fn ratio(&self) -> Ratio<i64> {
        // Canonical form is always a valid reduced ratio.
        Ratio::new_raw(self.num, self.den)
    }

    /// Shift by a power of ten without touching the fraction. `const`, so
    /// prefixed unit constants can be built from coherent ones.
    ///
    /// The exponent addition saturates; a saturated exponent is far outside
    /// the convertible ±30 range and surfaces as
    /// [`UnitError::PrecisionLoss`] at the first conversion.
    #[must_use]
    pub const fn scale_pow10(self, exp: i32) -> Self {
        Self {
            exp10: self.exp10.saturating_add(exp),
            ..self
        }
    }

    /// Whether this scale is exactly 1.
    pub const fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1 && self.exp10 == 0
    }

    /// Whether this scale is exactly 0.
    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Whether this is a pure power of ten (every SI prefix is).
    pub const fn is_pow10(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// The decimal exponent of the scale.
    pub const fn exponent(&self) -> i32 {
        self.exp10
    }

    /// Numerator of the fractional part.
    pub const fn numer(&self) -> i64 {
        self.num
    }

    /// Denominator of the fractional part.
    pub const fn denom(&self) -> i64 {
        self.den
    }

    // ==========================================================================
    // Arithmetic
    // ==========================================================================

    /// Multiply two scales: cross-multiplied, gcd-reduced, exponents added.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        let ratio = self
            .ratio()
            .checked_mul(&other.ratio())
            .ok_or(self.overflow(other))?;
        let exp10 = self
            .exp10
            .checked_add(other.exp10)
            .ok_or(self.overflow(other))?;
        Ok(Self::canonical(ratio, exp10))
    }

    /// Divide two scales: cross-multiplied, gcd-reduced, exponents
    /// subtracted. Dividing by zero is rejected.
    pub fn div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(UnitError::DivisionByZero);
        }
        let ratio = self
            .ratio()
            .checked_div(&other.ratio())
            .ok_or(self.overflow(other))?;
        let exp10 = self
            .exp10
            .checked_sub(other.exp10)
            .ok_or(self.overflow(other))?;
        Ok(Self::canonical(ratio, exp10))
    }

    /// Add two scales. Both operands are aligned to the smaller decimal
    /// exponent before the fractions combine; needed only for affine-offset
    /// arithmetic, not for everyday multiplicative scaling.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let exp10 = self.exp10.min(other.exp10);
        let a = self.aligned(exp10)?;
        let b = other.aligned(exp10)?;
        let ratio = a.checked_add(&b).ok_or(self.overflow(other))?;
        Ok(Self::canonical(ratio, exp10))
    }

    /// Subtract two scales, with the same exponent alignment as
    /// [`RationalScale::add`].
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let exp10 = self.exp10.min(other.exp10);
        let a = self.aligned(exp10)?;
        let b = other.aligned(exp10)?;
        let ratio = a.checked_sub(&b).ok_or(self.overflow(other))?;
        Ok(Self::canonical(ratio, exp10))
    }

    /// Negate the scale. Canonical form is preserved.
    #[must_use]
    pub const fn neg(self) -> Self {
        Self {
            num: -self.num,
            ..self
        }
    }

    /// Reciprocal: fraction inverted, exponent negated. Zero is rejected.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(UnitError::DivisionByZero);
        }
        let exp10 = self
            .exp10
            .checked_neg()
            .ok_or(UnitError::PrecisionLoss { exp10: self.exp10 })?;
        Ok(Self::canonical(self.ratio().recip(), exp10))
    }

    /// Raise to an integer power by repeated checked multiplication.
    pub fn pow(&self, n: i32) -> Result<Self> {
        let mut acc = Self::ONE;
        for _ in 0..n.unsigned_abs() {
            acc = acc.mul(self)?;
        }
        if n < 0 {
            acc = acc.recip()?;
        }
        Ok(acc)
    }

    /// Scale the operand's fraction so its decimal exponent becomes
    /// `target` (which must not exceed the current exponent).
    fn aligned(&self, target: i32) -> Result<Ratio<i64>> {
        let shift = (self.exp10 - target) as u32;
        let factor = 10i64
            .checked_pow(shift)
            .ok_or(UnitError::PrecisionLoss { exp10: self.exp10 })?;
        self.ratio()
            .checked_mul(&Ratio::from_integer(factor))
            .ok_or(UnitError::PrecisionLoss { exp10: self.exp10 })
    }

    fn overflow(&self, other: &Self) -> UnitError {
        UnitError::PrecisionLoss {
            exp10: self.exp10.saturating_add(other.exp10),
        }
    }

    // ==========================================================================
    // Floating conversion
    // ==========================================================================

    /// Convert to `f64` as `num/den × 10^exp10`.
    ///
    /// A decimal exponent outside ±30 is reported as
    /// [`UnitError::PrecisionLoss`]; it is never clamped or wrapped.
    pub fn to_f64(&self) -> Result<f64> {
        Ok(self.num as f64 / self.den as f64 * pow10_f64(self.exp10)?)
    }
}

impl fmt::Display for RationalScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den != 1 {
            write!(f, "{}/{}", self.num, self.den)?;
        } else {
            write!(f, "{}", self.num)?;
        }
        if self.exp10 != 0 {
            write!(f, "×10^{}", self.exp10)?;
        }
        Ok(())
    }
}
