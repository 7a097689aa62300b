//! # lealta-core: Pure Loyalty Logic for the Lealta Portal
//!
//! This crate is the **heart** of the Lealta loyalty engine. It contains
//! every rule that turns a purchase into points or stamps, and every
//! predicate that decides whether a reward can be claimed, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lealta Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Portal (out of scope)                       │   │
//! │  │    Purchase form ──► Campaign cards ──► Redemption dialog       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    lealta-flows                                 │   │
//! │  │    rules resolver, redemption state machine, ticket gate        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lealta-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌─────────────┐ ┌───────────────┐  │   │
//! │  │   │  types   │ │ accrual  │ │ eligibility │ │ ledger        │  │   │
//! │  │   │  Rules   │ │ points   │ │ minimum     │ │ Account       │  │   │
//! │  │   │ Campaign │ │ stamps   │ │ redeemable  │ │ projection    │  │   │
//! │  │   └──────────┘ └──────────┘ └─────────────┘ └───────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    lealta-api (remote boundary)                 │   │
//! │  │              JSON-over-HTTPS loyalty service client             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (BusinessRules, Movement, Campaign, ...)
//! - [`amount`] - Amount type with integer cents (no floating point!)
//! - [`accrual`] - Points and stamps award calculators
//! - [`eligibility`] - Minimum-amount, threshold and date-window gates
//! - [`progress`] - Display-only campaign progress
//! - [`ledger`] - Account projection from the movement history
//! - [`validation`] - Blocking operator-input checks
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, even the clock is FORBIDDEN here (dates are passed in)
//! 3. **Integer Amounts**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Floor in the client's ledger's favor**: fractional awards always round toward zero
//! 5. **Degrade, never panic**: malformed upstream data yields a zero award, not a crash
//!
//! ## Example Usage
//!
//! ```rust
//! use lealta_core::{accrual, eligibility, Amount, BusinessRules, ProgramType};
//!
//! let mut rules = BusinessRules::fallback(ProgramType::Points);
//! rules.minimum_amount = Amount::from_decimal(100.0);
//!
//! let purchase = Amount::from_decimal(500.0);
//! assert!(eligibility::minimum_amount_met(purchase, &rules));
//!
//! // $500 at the default 10% accrual → 50 points
//! assert_eq!(accrual::award_for_purchase(purchase, &rules), 50);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod accrual;
pub mod amount;
pub mod eligibility;
pub mod error;
pub mod ledger;
pub mod progress;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lealta_core::Amount` instead of
// `use lealta_core::amount::Amount`

pub use amount::Amount;
pub use error::{ValidationError, ValidationResult};
pub use ledger::{Account, StatementEntry};
pub use progress::CampaignProgress;
pub use types::*;
