//! # Eligibility Validator
//!
//! Pure predicate functions gating accrual and redemption.
//!
//! ## The Three Gates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  minimum_amount_met   purchase amount ≥ configured minimum              │
//! │  campaign_redeemable  available balance ≥ required quantity             │
//! │  campaign_active      manual override, else date window                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! When a gate fails, the caller blocks submission and surfaces the
//! configured threshold; how that is presented is the portal's concern.

use chrono::NaiveDate;

use crate::amount::Amount;
use crate::types::{BusinessRules, Campaign, ManualState};

/// Whether a purchase amount meets the business's configured minimum.
///
/// Boundary `amount == minimum` qualifies.
#[inline]
pub fn minimum_amount_met(amount: Amount, rules: &BusinessRules) -> bool {
    amount >= rules.minimum_amount
}

/// Whether a balance covers a campaign's threshold.
///
/// Boundary `balance == required` is redeemable.
#[inline]
pub fn campaign_redeemable(available_balance: i64, required_quantity: i64) -> bool {
    available_balance >= required_quantity
}

/// Effective activity of a campaign on a given day.
///
/// The administrator's manual state is authoritative when set;
/// otherwise the date window decides, inclusive on both ends. Missing
/// dates (including upstream dates that failed to parse) count as "not
/// active" rather than guessing.
pub fn campaign_active(campaign: &Campaign, today: NaiveDate) -> bool {
    match campaign.manual_state {
        ManualState::Activated => true,
        ManualState::Deactivated => false,
        ManualState::Unset => match (campaign.valid_from, campaign.valid_to) {
            (Some(from), Some(to)) => from <= today && today <= to,
            _ => false,
        },
    }
}
