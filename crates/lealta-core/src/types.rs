//! # Domain Types
//!
//! Core domain types for the loyalty engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  BusinessRules  │   │    Movement     │   │    Campaign     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  program_type   │   │  kind (A/R)     │   │  required_qty   │       │
//! │  │  minimum_amount │   │  quantity       │   │  reward         │       │
//! │  │  accrual_rate   │   │  amount         │   │  valid window   │       │
//! │  │  accumulable    │   │  reference      │   │  manual_state   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   AccrualRate   │   │   ProgramType   │   │   ManualState   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Points         │   │  Activated      │       │
//! │  │  1000 = 10%     │   │  Stamps         │   │  Deactivated    │       │
//! │  └─────────────────┘   └─────────────────┘   │  Unset          │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every type here is plain data. Rules come from the remote service
//! (via the resolver) and are treated as immutable for the duration of
//! one calculation; movements are append-only and never edited.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::amount::Amount;

// =============================================================================
// Accrual Rate
// =============================================================================

/// Accrual percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the documented default accrual percentage)
///
/// The wire carries a decimal percentage (0-100); conversion to bps
/// happens once, at the rules resolver, so award math never touches
/// floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualRate(u32);

impl AccrualRate {
    /// Creates an accrual rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        AccrualRate(bps)
    }

    /// Creates an accrual rate from a wire percentage.
    ///
    /// Out-of-range and non-finite values are clamped into [0%, 100%];
    /// a malformed rate must never grant more than the full amount.
    pub fn from_percentage(pct: f64) -> Self {
        if !pct.is_finite() || pct <= 0.0 {
            return AccrualRate(0);
        }
        let bps = (pct * 100.0).round() as u32;
        AccrualRate(bps.min(10_000))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero accrual rate.
    #[inline]
    pub const fn zero() -> Self {
        AccrualRate(0)
    }
}

impl Default for AccrualRate {
    fn default() -> Self {
        AccrualRate::zero()
    }
}

// =============================================================================
// Program Type
// =============================================================================

/// Per-business mode determining how balances are denominated.
///
/// ## Two-Mode Dispatch
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Points: award = floor(amount × percentage / 100)                       │
/// │  Stamps: award = 1 per purchase, or floor(amount / minimum) when        │
/// │          the business allows accumulation                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// This is a closed variant on purpose: the calculators match on it
/// exhaustively, so a new program type cannot be added without the
/// compiler pointing at every place that must decide what it awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    /// Percentage-of-amount accrual, balance in points.
    Points,
    /// Count-based accrual, balance in stamps.
    Stamps,
}

// =============================================================================
// Business Rules
// =============================================================================

/// The active loyalty configuration for one business.
///
/// ## Lifecycle
/// Fetched on demand per business id by the rules resolver; never
/// mutated by the engine itself. Every field is fully populated by the
/// resolver (absence upstream degrades to documented defaults), so no
/// downstream component ever re-defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRules {
    /// Points or stamps mode for this business.
    pub program_type: ProgramType,

    /// Minimum qualifying purchase amount.
    pub minimum_amount: Amount,

    /// Accrual percentage in basis points. Meaningful only for Points.
    pub accrual_rate: AccrualRate,

    /// Stamp-mode flag: whether one purchase can earn multiple stamps
    /// (amount-proportional) versus exactly one per qualifying purchase.
    /// Meaningful only for Stamps.
    pub accumulable: bool,

    /// Free-text notes configured by the business administrator.
    pub notes: Option<String>,
}

impl BusinessRules {
    /// The documented fallback configuration for unconfigured businesses.
    ///
    /// Accrual must remain possible even when no rules exist upstream:
    /// no minimum, 10% accrual, one stamp per purchase.
    pub fn fallback(program_type: ProgramType) -> Self {
        BusinessRules {
            program_type,
            minimum_amount: Amount::zero(),
            accrual_rate: AccrualRate::from_bps(1000), // 10%
            accumulable: false,
            notes: None,
        }
    }
}

// =============================================================================
// Movements
// =============================================================================

/// Direction of a ledger movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Increases the client's balance (tied to a purchase or a manual
    /// stamp grant).
    Accrual,
    /// Decreases the client's balance in exchange for a campaign reward.
    Redemption,
}

/// An immutable, append-only ledger entry.
///
/// Movements are never edited or deleted; the visible balance is always
/// a fold over the ordered movement sequence (see [`crate::ledger`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Remote identifier of the movement.
    pub id: String,

    /// Accrual or redemption.
    pub kind: MovementKind,

    /// Points or stamps moved. Always non-negative; the kind carries
    /// the sign.
    pub quantity: i64,

    /// Purchase amount tied to the movement. Zero for manual stamp
    /// grants and redemptions.
    pub amount: Amount,

    /// Free-form correlation reference recorded at submission time.
    pub reference: String,

    /// When the movement was recorded. `None` when the remote date was
    /// missing or unparseable; balance math only needs quantities.
    pub date: Option<DateTime<Utc>>,
}

// =============================================================================
// Campaigns
// =============================================================================

/// Administrator override on a campaign's activity.
///
/// When set, the manual state is authoritative over the date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualState {
    /// Campaign forced active regardless of dates.
    Activated,
    /// Campaign forced inactive regardless of dates.
    Deactivated,
    /// No override; the date window decides.
    #[default]
    Unset,
}

/// A time-bounded, threshold-gated reward offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Remote identifier of the campaign.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Display description.
    pub description: String,

    /// Points or stamps needed to redeem. Denominated per the campaign's
    /// program type.
    pub required_quantity: i64,

    /// What the client receives on redemption.
    pub reward: String,

    /// Start of the validity window. `None` when missing or unparseable
    /// upstream, which counts as "not active" unless manually activated.
    pub valid_from: Option<NaiveDate>,

    /// End of the validity window (inclusive).
    pub valid_to: Option<NaiveDate>,

    /// Administrator override, authoritative when set.
    pub manual_state: ManualState,

    /// Which program denomination this campaign targets.
    pub program_type: ProgramType,
}

// =============================================================================
// Unit Tests
// =============================================================================
