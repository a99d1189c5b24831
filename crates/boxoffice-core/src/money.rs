//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A till that drifts by fractions of a cent never reconciles.           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    5000.00 is stored as 500000                                          │
//! │    Every addition, subtraction and discount is exact integer math      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boxoffice_core::money::Money;
//!
//! // Create from minor units (preferred)
//! let price = Money::from_minor(500_000); // 5000.00
//!
//! // Arithmetic operations
//! let change = Money::from_minor(550_000) - price; // 500.00
//! assert_eq!(change.minor(), 50_000);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(5000.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest unit of the (generic) event currency.
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate values such as a payment shortfall may
///   be computed as `paid - price` before the sign is inspected
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support plus total ordering for comparisons
///   like `amount_paid < price`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use boxoffice_core::money::Money;
    ///
    /// let price = Money::from_minor(300_000); // 3000.00
    /// assert_eq!(price.minor(), 300_000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use boxoffice_core::money::Money;
    ///
    /// let price = Money::from_major(9000); // 9000.00
    /// assert_eq!(price.minor(), 900_000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the fractional portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (2000 = 20%)
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(amount * bps + 5000) / 10000`.
    /// The base prices in this system are whole hundreds, so the senior
    /// discount is always exact; the rounding term covers any future table.
    ///
    /// ## Example
    /// ```rust
    /// use boxoffice_core::money::Money;
    ///
    /// let base = Money::from_minor(900_000); // 9000.00
    /// let discounted = base.apply_percentage_discount(2000); // 20% off
    /// assert_eq!(discounted.minor(), 720_000); // 7200.00
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // Use i128 to prevent overflow on large amounts
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_minor(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error produced when a tendered-amount string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid amount: expected a number like 5000 or 5000.50")]
pub struct ParseMoneyError;

/// Parses operator-typed amounts: `"5000"`, `"5000.5"`, `"5000.50"`.
///
/// At most two decimal places are accepted; this is the only place in the
/// system where a decimal point exists outside of display formatting.
///
/// ## Example
/// ```rust
/// use boxoffice_core::money::Money;
///
/// let paid: Money = "5000.50".parse().unwrap();
/// assert_eq!(paid.minor(), 500_050);
/// assert!("5,000".parse::<Money>().is_err());
/// ```
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unsigned = s.strip_prefix('-').unwrap_or(s);
        let negative = unsigned.len() != s.len();

        let (major_str, minor_str) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (unsigned, ""),
        };

        if major_str.is_empty() || !major_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError);
        }
        if minor_str.len() > 2 || !minor_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError);
        }

        let major: i64 = major_str.parse().map_err(|_| ParseMoneyError)?;
        let minor: i64 = match minor_str.len() {
            0 => 0,
            len => {
                let parsed: i64 = minor_str.parse().map_err(|_| ParseMoneyError)?;
                // A single decimal digit is tenths, not hundredths
                if len == 1 {
                    parsed * 10
                } else {
                    parsed
                }
            }
        };

        // Oversized input must come back as a parse error, not wrap
        let total = major
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(minor))
            .ok_or(ParseMoneyError)?;
        Ok(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation matches the report wire format: two decimal
/// places, no currency symbol (the event currency is a generic unit).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.major_part().abs(),
            self.minor_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
