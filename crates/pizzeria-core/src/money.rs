//! # Money Module
//!
//! Provides the `Money` type for prices and invoice totals.
//!
//! ## Integer Cents Inside, Decimals On The Wire
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend / API client         Rust                    SQLite           │
//! │                                                                         │
//! │  { "price": 12.5 }  ──serde──► Money(1250) ──sqlx──► price_cents = 1250 │
//! │  { "price": 12.5 }  ◄─serde─── Money(1250) ◄─sqlx─── price_cents = 1250 │
//! │                                                                         │
//! │  The JSON contract keeps decimal numbers (the frontend does             │
//! │  `total_amount.toFixed(2)`), but nothing in between ever holds a float. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! assert_eq!(price.to_decimal(), 10.99);
//!
//! let parsed = Money::from_decimal(10.99).unwrap();
//! assert_eq!(parsed, price);
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Add;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// Largest absolute decimal amount accepted from the wire.
///
/// Keeps `amount * 100` well inside the exactly representable range of f64.
pub const MAX_DECIMAL_AMOUNT: f64 = 1e13;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: the API does not forbid negative prices, so neither do we
/// - **Serde as decimal**: `Money(999)` is written as `9.99`
/// - **sqlx transparent**: stored as a plain INTEGER column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ## Errors
    /// `CoreError::InvalidAmount` for NaN, infinities, and amounts beyond
    /// [`MAX_DECIMAL_AMOUNT`].
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(12.5).unwrap().cents(), 1250);
    /// assert_eq!(Money::from_decimal(0.125).unwrap().cents(), 13);
    /// assert!(Money::from_decimal(f64::NAN).is_err());
    /// ```
    pub fn from_decimal(amount: f64) -> CoreResult<Self> {
        if !amount.is_finite() {
            return Err(CoreError::InvalidAmount {
                value: amount.to_string(),
                reason: "must be a finite number".to_string(),
            });
        }

        if amount.abs() > MAX_DECIMAL_AMOUNT {
            return Err(CoreError::InvalidAmount {
                value: amount.to_string(),
                reason: format!("must not exceed {}", MAX_DECIMAL_AMOUNT),
            });
        }

        Ok(Money((amount * 100.0).round() as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal amount (for the JSON wire format only).
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies money by a quantity, saturating at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let slice = Money::from_cents(350);
    /// assert_eq!(slice.multiply_quantity(3).cents(), 1050);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$12.50`, for logs.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating, like [`Money::multiply_quantity`].
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_decimal(amount).map_err(de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_decimal_rounds_to_nearest_cent() {
        assert_eq!(Money::from_decimal(9.99).unwrap().cents(), 999);
        assert_eq!(Money::from_decimal(12.0).unwrap().cents(), 1200);
        assert_eq!(Money::from_decimal(0.004).unwrap().cents(), 0);
        assert_eq!(Money::from_decimal(-5.5).unwrap().cents(), -550);
    }

    #[test]
    fn test_from_decimal_rejects_non_finite() {
        assert!(Money::from_decimal(f64::INFINITY).is_err());
        assert!(Money::from_decimal(f64::NAN).is_err());
        assert!(Money::from_decimal(1e14).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
    }

    #[test]
    fn test_serializes_as_decimal() {
        let json = serde_json::to_string(&Money::from_cents(999)).unwrap();
        assert_eq!(json, "9.99");

        let json = serde_json::to_string(&Money::from_cents(1250)).unwrap();
        assert_eq!(json, "12.5");
    }

    #[test]
    fn test_deserializes_integers_and_decimals() {
        let money: Money = serde_json::from_str("12").unwrap();
        assert_eq!(money.cents(), 1200);

        let money: Money = serde_json::from_str("14.99").unwrap();
        assert_eq!(money.cents(), 1499);
    }

    #[test]
    fn test_deserialize_rejects_strings() {
        assert!(serde_json::from_str::<Money>("\"12.00\"").is_err());
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_cents(1200), Money::from_cents(350)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 1550);
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let price = Money::from_cents(1_000_000);
        assert_eq!(price.multiply_quantity(i64::MAX).cents(), i64::MAX);
        assert_eq!(price.multiply_quantity(i64::MIN).cents(), i64::MIN);

        let total = Money::from_cents(i64::MAX) + Money::from_cents(1);
        assert_eq!(total.cents(), i64::MAX);

        let total: Money = [Money::from_cents(i64::MIN), Money::from_cents(-5)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), i64::MIN);
    }
}
