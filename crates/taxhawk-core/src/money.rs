//! Currency type with statutory rounding rules.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Represents a rupee amount.
///
/// Internally uses `rust_decimal::Decimal` so slab/cess/surcharge math stays
/// exact until a rounding site is reached; all user-visible amounts are
/// whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero rupees.
    pub const ZERO: Money = Money(dec!(0));

    /// Create from a decimal value.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create from whole rupees.
    pub fn from_rupees(rupees: i64) -> Self {
        Self(Decimal::new(rupees, 0))
    }

    /// Returns the inner decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns the amount as whole rupees (truncated).
    pub fn as_rupees(&self) -> i64 {
        self.0.trunc().to_string().parse().unwrap_or(0)
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the minimum of two amounts.
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two amounts.
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Clamp to a non-negative amount.
    pub fn non_negative(self) -> Self {
        Self(self.0.max(Decimal::ZERO))
    }

    /// Round to the nearest whole rupee.
    ///
    /// Half-away-from-zero, used at every rounding site (cess, surcharge,
    /// savings) so results are consistent across checks.
    pub fn round_to_rupee(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Multiply by a dimensionless rate (e.g., a tax rate or a slab rate).
    pub fn multiply_rate(&self, rate: Decimal) -> Self {
        Self(self.0 * rate)
    }

    /// Saturating subtraction: returns zero if the result would be negative.
    pub fn saturating_sub(&self, other: Self) -> Self {
        if self.0 > other.0 {
            Self(self.0 - other.0)
        } else {
            Self::ZERO
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{20b9}{}", self.round_to_rupee().0.trunc())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, rate: Decimal) -> Money {
        self.multiply_rate(rate)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl From<Money> for Decimal {
    fn from(m: Money) -> Self {
        m.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        let m = Money::from_rupees(12345);
        assert_eq!(m.as_rupees(), 12345);
        assert_eq!(m.to_string(), "\u{20b9}12345");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let m1 = Money::new(dec!(123.49));
        assert_eq!(m1.round_to_rupee(), Money::from_rupees(123));

        let m2 = Money::new(dec!(123.50));
        assert_eq!(m2.round_to_rupee(), Money::from_rupees(124));

        let m3 = Money::new(dec!(123.51));
        assert_eq!(m3.round_to_rupee(), Money::from_rupees(124));
    }

    #[test]
    fn test_saturating_sub() {
        let a = Money::from_rupees(100);
        let b = Money::from_rupees(150);
        assert_eq!(a.saturating_sub(b), Money::ZERO);
        assert_eq!(b.saturating_sub(a), Money::from_rupees(50));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_rupees(100),
            Money::from_rupees(200),
            Money::from_rupees(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total, Money::from_rupees(600));
    }

    #[test]
    fn test_non_negative() {
        let m = Money::new(dec!(-50));
        assert_eq!(m.non_negative(), Money::ZERO);
        assert_eq!(Money::from_rupees(50).non_negative(), Money::from_rupees(50));
    }
}
