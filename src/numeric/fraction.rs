// ============================================================================
// Fraction
// Exact rational number kept in lowest terms
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact rational number.
///
/// Invariants, upheld by every constructor and operation:
/// - the denominator is strictly positive
/// - `gcd(|numerator|, denominator) == 1`
/// - zero is always `0/1`
///
/// Because the representation is canonical, the derived `PartialEq`/`Hash`
/// coincide with numeric equality.
///
/// # Example
/// ```
/// use faraid_engine::numeric::Fraction;
///
/// let eighth = Fraction::new(1, 8)?;
/// let sixth = Fraction::new(1, 6)?;
/// let total = eighth.checked_add(sixth)?;
/// assert_eq!(total.to_string(), "7/24");
/// # Ok::<(), faraid_engine::numeric::NumericError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Fraction {
    num: i64,
    den: i64,
}

/// Euclidean greatest common divisor.
fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Fraction {
    /// Zero (`0/1`)
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// The whole estate (`1/1`)
    pub const ONE: Self = Self { num: 1, den: 1 };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction and reduce it to lowest terms.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `den` is zero.
    pub fn new(num: i64, den: i64) -> NumericResult<Self> {
        Self::reduce(num as i128, den as i128)
    }

    /// Create a whole-number fraction.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    /// Normalize sign, divide out the gcd and narrow back to i64.
    fn reduce(num: i128, den: i128) -> NumericResult<Self> {
        if den == 0 {
            return Err(NumericError::DivisionByZero);
        }
        if num == 0 {
            return Ok(Self::ZERO);
        }

        let (num, den) = if den < 0 {
            (
                num.checked_neg().ok_or(NumericError::Overflow)?,
                den.checked_neg().ok_or(NumericError::Overflow)?,
            )
        } else {
            (num, den)
        };

        let divisor = gcd(num.unsigned_abs(), den.unsigned_abs()) as i128;
        let num = num / divisor;
        let den = den / divisor;

        let num = i64::try_from(num).map_err(|_| {
            if num > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })?;
        let den = i64::try_from(den).map_err(|_| NumericError::Overflow)?;

        Ok(Self { num, den })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Numerator in lowest terms (carries the sign).
    #[inline]
    pub const fn numer(self) -> i64 {
        self.num
    }

    /// Denominator in lowest terms (always positive).
    #[inline]
    pub const fn denom(self) -> i64 {
        self.den
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.num > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.num < 0
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the reduced result is out of range.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        let left = (self.num as i128)
            .checked_mul(rhs.den as i128)
            .ok_or(NumericError::Overflow)?;
        let right = (rhs.num as i128)
            .checked_mul(self.den as i128)
            .ok_or(NumericError::Overflow)?;
        let num = left.checked_add(right).ok_or(NumericError::Overflow)?;
        Self::reduce(num, self.den as i128 * rhs.den as i128)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the reduced result is out of range.
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        let left = (self.num as i128)
            .checked_mul(rhs.den as i128)
            .ok_or(NumericError::Overflow)?;
        let right = (rhs.num as i128)
            .checked_mul(self.den as i128)
            .ok_or(NumericError::Overflow)?;
        let num = left.checked_sub(right).ok_or(NumericError::Underflow)?;
        Self::reduce(num, self.den as i128 * rhs.den as i128)
    }

    /// Checked multiplication.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        Self::reduce(
            self.num as i128 * rhs.num as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.num == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Self::reduce(
            self.num as i128 * rhs.den as i128,
            self.den as i128 * rhs.num as i128,
        )
    }

    /// Sum a sequence of fractions, starting from zero.
    pub fn sum<I>(fractions: I) -> NumericResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        fractions
            .into_iter()
            .try_fold(Self::ZERO, |acc, f| acc.checked_add(f))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Nearest `f64` approximation.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Apply this fraction to an amount: `amount * num / den`.
    ///
    /// This is the single point where exact shares become floating-point money.
    #[inline]
    pub fn of_amount(self, amount: f64) -> f64 {
        amount * self.num as f64 / self.den as f64
    }

    /// Convert to rust_decimal::Decimal (rounded to Decimal's 28 digits).
    ///
    /// # Errors
    /// Returns `Overflow` if the quotient cannot be represented.
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from(self.num)
            .checked_div(rust_decimal::Decimal::from(self.den))
            .ok_or(NumericError::Overflow)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    /// Cross-multiplication; denominators are positive so the sign is preserved.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let left = self.num as i128 * other.den as i128;
        let right = other.num as i128 * self.den as i128;
        left.cmp(&right)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl std::str::FromStr for Fraction {
    type Err = NumericError;

    /// Parse `"n"` or `"n/d"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let parse = |part: &str| -> NumericResult<i64> {
            part.trim().parse().map_err(|_| NumericError::InvalidInput)
        };

        match s.split_once('/') {
            Some((num, den)) => Self::new(parse(num)?, parse(den)?),
            None => Ok(Self::from_integer(parse(s)?)),
        }
    }
}

impl TryFrom<String> for Fraction {
    type Error = NumericError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Fraction> for String {
    fn from(value: Fraction) -> Self {
        value.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
