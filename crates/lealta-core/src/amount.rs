//! # Amount Module
//!
//! Provides the `Amount` type for handling purchase amounts safely.
//!
//! ## Why Integer Amounts?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a loyalty engine that means:                                        │
//! │    $499.999999 × 10% = 49.9999 points → 49 or 50?                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $500.00 is 50000 cents, always exactly                               │
//! │    Award math is integer division, floor is explicit                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The remote service speaks decimal amounts; the conversion happens once
//! at the boundary via [`Amount::from_decimal`], which also absorbs NaN
//! and infinite inputs (they become zero, which every calculator treats
//! as "nothing to award" rather than a panic).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Amount Type
// =============================================================================

/// A purchase amount in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: malformed upstream data can be negative; the
///   calculators clamp it, the type does not hide it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(i64);

impl Amount {
    /// Creates an Amount from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use lealta_core::Amount;
    ///
    /// let purchase = Amount::from_cents(50000); // $500.00
    /// assert_eq!(purchase.cents(), 50000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    /// Converts a decimal amount (as received on the wire) into cents.
    ///
    /// NaN and infinite values collapse to zero so that malformed input
    /// degrades to "no award" instead of poisoning downstream math.
    ///
    /// ## Example
    /// ```rust
    /// use lealta_core::Amount;
    ///
    /// assert_eq!(Amount::from_decimal(500.0).cents(), 50000);
    /// assert_eq!(Amount::from_decimal(10.99).cents(), 1099);
    /// assert_eq!(Amount::from_decimal(f64::NAN).cents(), 0);
    /// ```
    pub fn from_decimal(value: f64) -> Self {
        if !value.is_finite() {
            return Amount(0);
        }
        Amount((value * 100.0).round() as i64)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the decimal value the remote service expects.
    ///
    /// Only used when building wire requests; all engine math stays in
    /// cents.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0)
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the amount in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. The portal formats amounts for the
/// operator with proper localization.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

/// Default amount is zero.
impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
