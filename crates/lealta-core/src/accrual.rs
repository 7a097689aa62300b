//! # Accrual Calculator
//!
//! Pure functions converting a purchase amount (and the resolved rules)
//! into an integer points or stamps award.
//!
//! ## Calculation Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Accrual Calculation                                │
//! │                                                                         │
//! │  Purchase amount + BusinessRules                                        │
//! │       │                                                                 │
//! │       ├── ProgramType::Points ──► floor(amount × percentage / 100)     │
//! │       │                                                                 │
//! │       └── ProgramType::Stamps ──┬── accumulable = false ──► 1 stamp    │
//! │                                 │                                       │
//! │                                 └── accumulable = true ───►            │
//! │                                     floor(amount / minimum)            │
//! │                                     (0 when minimum is 0)              │
//! │                                                                         │
//! │  Manual stamp grant (no purchase) ──► operator count, bounded 1-10     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All paths round toward zero: fractional accrual is rejected in the
//! business's favor, never creating fractional ledger entries. No path
//! panics; malformed input degrades to a zero award.

use crate::amount::Amount;
use crate::types::{AccrualRate, BusinessRules, ProgramType};

/// Maximum stamps an operator may grant in one manual movement.
///
/// ## Business Reason
/// Prevents fat-finger grants (e.g. typing 100 instead of 10) on the
/// manual stamp form. Policy value, not a technical limit.
pub const MAX_MANUAL_STAMPS: i64 = 10;

/// Minimum stamps for a manual movement (a grant of zero is meaningless).
pub const MIN_MANUAL_STAMPS: i64 = 1;

// =============================================================================
// Points
// =============================================================================

/// Points awarded for a purchase: `floor(amount × percentage / 100)`.
///
/// Negative amounts award 0 points (defensive floor, never an error:
/// upstream data quality must not crash an accrual form).
///
/// ## Example
/// ```rust
/// use lealta_core::{accrual, Amount, AccrualRate};
///
/// let amount = Amount::from_decimal(500.0);
/// let rate = AccrualRate::from_percentage(10.0);
/// assert_eq!(accrual::points_awarded(amount, rate), 50);
/// ```
pub fn points_awarded(amount: Amount, rate: AccrualRate) -> i64 {
    if !amount.is_positive() {
        return 0;
    }
    // cents × bps / 1_000_000 == dollars × pct / 100, floored.
    // i128 intermediate prevents overflow on large amounts.
    ((amount.cents() as i128 * rate.bps() as i128) / 1_000_000) as i64
}

// =============================================================================
// Stamps
// =============================================================================

/// Stamps awarded for a purchase.
///
/// - `accumulable = false`: exactly 1 stamp per qualifying purchase,
///   regardless of magnitude.
/// - `accumulable = true`: `floor(amount / minimum_amount)`, defined as
///   0 when the minimum is 0. The caller must treat 0 as "not
///   eligible", not as "infinite stamps".
///
/// ## Example
/// ```rust
/// use lealta_core::{accrual, Amount, BusinessRules, ProgramType};
///
/// let mut rules = BusinessRules::fallback(ProgramType::Stamps);
/// rules.accumulable = true;
/// rules.minimum_amount = Amount::from_decimal(100.0);
///
/// assert_eq!(accrual::stamps_awarded(Amount::from_decimal(250.0), &rules), 2);
/// assert_eq!(accrual::stamps_awarded(Amount::from_decimal(99.0), &rules), 0);
/// ```
pub fn stamps_awarded(amount: Amount, rules: &BusinessRules) -> i64 {
    if !amount.is_positive() {
        return 0;
    }

    if !rules.accumulable {
        return 1;
    }

    let minimum = rules.minimum_amount.cents();
    if minimum <= 0 {
        // Guard against division by zero; 0 here means "not eligible".
        return 0;
    }

    amount.cents() / minimum
}

// =============================================================================
// Program Dispatch
// =============================================================================

/// Award for a purchase, dispatched on the business's program type.
///
/// One arm per variant; the two-mode branching lives here and nowhere
/// else.
pub fn award_for_purchase(amount: Amount, rules: &BusinessRules) -> i64 {
    match rules.program_type {
        ProgramType::Points => points_awarded(amount, rules.accrual_rate),
        ProgramType::Stamps => stamps_awarded(amount, rules),
    }
}

// =============================================================================
// Manual Stamps
// =============================================================================

/// Checks an operator-supplied manual stamp count against policy bounds.
///
/// Used when the business records stamps without an associated purchase
/// amount; the amount path is bypassed entirely.
pub fn manual_stamps_in_bounds(count: i64) -> bool {
    (MIN_MANUAL_STAMPS..=MAX_MANUAL_STAMPS).contains(&count)
}

// =============================================================================
// Unit Tests
// =============================================================================
