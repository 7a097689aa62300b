//! # Campaign Progress Tracker
//!
//! Derives a client's display-only progress toward each active
//! campaign from their current balance. No side effects; the tracker
//! never mutates the campaigns or the balance it reads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::eligibility::{campaign_active, campaign_redeemable};
use crate::types::{Campaign, ProgramType};

/// A client's progress toward one campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignProgress {
    /// Campaign this progress refers to.
    pub campaign_id: String,

    /// Percent of the threshold covered, clamped to [0, 100].
    pub percent: f64,

    /// Points or stamps still missing, never negative.
    pub remaining: i64,

    /// Whether the balance already covers the threshold.
    pub redeemable: bool,
}

/// Progress toward a single campaign.
///
/// `required_quantity == 0` is treated as trivially satisfied (100%,
/// nothing remaining) rather than dividing by zero.
pub fn campaign_progress(campaign: &Campaign, available_balance: i64) -> CampaignProgress {
    let required = campaign.required_quantity;

    let percent = if required <= 0 {
        100.0
    } else {
        let raw = 100.0 * available_balance.max(0) as f64 / required as f64;
        raw.min(100.0)
    };

    CampaignProgress {
        campaign_id: campaign.id.clone(),
        percent,
        remaining: (required - available_balance).max(0),
        redeemable: campaign_redeemable(available_balance, required),
    }
}

/// Progress toward every campaign the client can currently see.
///
/// Filters to campaigns whose program type matches the business's
/// configured type and which are active today; inactive or
/// other-denomination campaigns produce no entry at all.
pub fn track_progress(
    campaigns: &[Campaign],
    program_type: ProgramType,
    available_balance: i64,
    today: NaiveDate,
) -> Vec<CampaignProgress> {
    campaigns
        .iter()
        .filter(|c| c.program_type == program_type)
        .filter(|c| campaign_active(c, today))
        .map(|c| campaign_progress(c, available_balance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ManualState;

    fn campaign(id: &str, required: i64, program_type: ProgramType) -> Campaign {
        Campaign {
            id: id.to_string(),
            name: format!("Campaign {}", id),
            description: String::new(),
            required_quantity: required,
            reward: "reward".to_string(),
            valid_from: None,
            valid_to: None,
            manual_state: ManualState::Activated,
            program_type,
        }
    }

    fn day(d: &str) -> NaiveDate {
        d.parse().unwrap()
    }

    #[test]
    fn test_progress_at_threshold() {
        // 80 required, balance 80 → redeemable, 100%
        let c = campaign("c1", 80, ProgramType::Points);
        let progress = campaign_progress(&c, 80);
        assert!(progress.redeemable);
        assert_eq!(progress.percent, 100.0);
        assert_eq!(progress.remaining, 0);
    }

    #[test]
    fn test_progress_one_below_threshold() {
        // balance 79/80 → not redeemable, 98.75%
        let c = campaign("c1", 80, ProgramType::Points);
        let progress = campaign_progress(&c, 79);
        assert!(!progress.redeemable);
        assert!((progress.percent - 98.75).abs() < 1e-9);
        assert_eq!(progress.remaining, 1);
    }

    #[test]
    fn test_progress_clamped_above_threshold() {
        let c = campaign("c1", 80, ProgramType::Points);
        let progress = campaign_progress(&c, 500);
        assert_eq!(progress.percent, 100.0);
        assert_eq!(progress.remaining, 0);
    }

    #[test]
    fn test_zero_threshold_is_trivially_satisfied() {
        let c = campaign("c1", 0, ProgramType::Points);
        let progress = campaign_progress(&c, 0);
        assert_eq!(progress.percent, 100.0);
        assert_eq!(progress.remaining, 0);
        assert!(progress.redeemable);
    }

    #[test]
    fn test_negative_balance_clamps_to_zero_percent() {
        let c = campaign("c1", 80, ProgramType::Points);
        let progress = campaign_progress(&c, -10);
        assert_eq!(progress.percent, 0.0);
        assert_eq!(progress.remaining, 90);
    }

    #[test]
    fn test_track_filters_program_type_and_activity() {
        let mut inactive = campaign("off", 10, ProgramType::Points);
        inactive.manual_state = ManualState::Deactivated;

        let campaigns = vec![
            campaign("points", 10, ProgramType::Points),
            campaign("stamps", 10, ProgramType::Stamps),
            inactive,
        ];

        let tracked = track_progress(&campaigns, ProgramType::Points, 5, day("2026-06-15"));
        assert_eq!(tracked.len(), 1);
        assert_eq!(tracked[0].campaign_id, "points");
        assert_eq!(tracked[0].percent, 50.0);
        assert_eq!(tracked[0].remaining, 5);
    }
}
