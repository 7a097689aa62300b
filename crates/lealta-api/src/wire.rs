//! # Wire Shapes
//!
//! Request and response DTOs for the loyalty service. These shapes are
//! preserved for compatibility with the remote side; everything the
//! engine consumes converts into `lealta-core` domain types here, at
//! the boundary, so nothing downstream ever sees a raw decimal or a
//! one-letter kind code.
//!
//! ## Wire ↔ Domain Conversions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  kind "A" (acumulación) → MovementKind::Accrual                         │
//! │  kind "C" (canje)       → MovementKind::Redemption                      │
//! │  decimal amounts        → Amount (integer cents)                        │
//! │  RFC 3339 date strings  → DateTime<Utc> (unparseable → None)            │
//! │  campaign date strings  → NaiveDate (unparseable → None → not active)   │
//! │  manualState string     → ManualState (unknown → Unset)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use lealta_core::{Amount, Campaign, ManualState, Movement, MovementKind, ProgramType};

// =============================================================================
// Rules
// =============================================================================

/// `GetRules` response body.
///
/// Absence of configuration is represented by the endpoint's notFound,
/// not by this shape; the rules resolver in lealta-flows owns the
/// defaulting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesDto {
    /// Minimum qualifying purchase amount, decimal.
    pub minimum_amount: f64,

    /// Accrual percentage in [0, 100], decimal.
    pub percentage: f64,

    /// Stamp-mode accumulation flag.
    #[serde(default)]
    pub accumulable: bool,

    /// Administrator notes.
    #[serde(default)]
    pub notes: Option<String>,
}

// =============================================================================
// Movements
// =============================================================================

/// `GetAccountMovements` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementsResponse {
    #[serde(default)]
    pub movements: Vec<MovementDto>,
}

/// One ledger movement on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementDto {
    pub id: String,

    /// `"A"` for accrual, `"C"` for redemption.
    pub kind: String,

    pub quantity: i64,

    /// Purchase amount tied to the movement, decimal. Zero for manual
    /// stamp grants.
    #[serde(default)]
    pub amount: f64,

    #[serde(default)]
    pub reference: String,

    /// RFC 3339 timestamp.
    #[serde(default)]
    pub date: Option<String>,
}

impl MovementDto {
    /// Converts into a domain movement.
    ///
    /// Returns `None` for unknown kind codes: a movement whose
    /// direction we cannot interpret must not silently count toward
    /// the balance in either direction.
    pub fn into_domain(self) -> Option<Movement> {
        let kind = match self.kind.trim().to_ascii_uppercase().as_str() {
            "A" => MovementKind::Accrual,
            "C" => MovementKind::Redemption,
            other => {
                warn!(movement_id = %self.id, kind = %other, "ignoring movement with unknown kind");
                return None;
            }
        };

        let date = self.date.as_deref().and_then(parse_movement_date);

        Some(Movement {
            id: self.id,
            kind,
            quantity: self.quantity.max(0),
            amount: Amount::from_decimal(self.amount),
            reference: self.reference,
            date,
        })
    }
}

fn parse_movement_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Converts a full wire history into domain movements, dropping the
/// entries that cannot be interpreted.
pub fn movements_into_domain(response: MovementsResponse) -> Vec<Movement> {
    response
        .movements
        .into_iter()
        .filter_map(MovementDto::into_domain)
        .collect()
}

// =============================================================================
// Campaigns
// =============================================================================

/// `GetActiveCampaigns` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignsResponse {
    #[serde(default)]
    pub campaigns: Vec<CampaignDto>,
}

/// One campaign on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDto {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub required_quantity: i64,

    #[serde(default)]
    pub reward: String,

    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub valid_from: Option<String>,

    /// `YYYY-MM-DD`, inclusive.
    #[serde(default)]
    pub valid_to: Option<String>,

    /// `"activated"` / `"deactivated"`, absent when unset.
    #[serde(default)]
    pub manual_state: Option<String>,

    /// `"points"` or `"stamps"`.
    pub program_type: String,
}

impl CampaignDto {
    /// Converts into a domain campaign.
    ///
    /// Returns `None` when the program type is unknown: a campaign we
    /// cannot denominate cannot be tracked or redeemed. Unparseable
    /// dates stay `None`, which the eligibility rules treat as "not
    /// active".
    pub fn into_domain(self) -> Option<Campaign> {
        let program_type = match self.program_type.trim().to_ascii_lowercase().as_str() {
            "points" => ProgramType::Points,
            "stamps" => ProgramType::Stamps,
            other => {
                warn!(campaign_id = %self.id, program_type = %other, "ignoring campaign with unknown program type");
                return None;
            }
        };

        let manual_state = match self.manual_state.as_deref().map(str::to_ascii_lowercase) {
            Some(ref s) if s == "activated" => ManualState::Activated,
            Some(ref s) if s == "deactivated" => ManualState::Deactivated,
            _ => ManualState::Unset,
        };

        Some(Campaign {
            id: self.id,
            name: self.name,
            description: self.description,
            required_quantity: self.required_quantity,
            reward: self.reward,
            valid_from: self.valid_from.as_deref().and_then(parse_campaign_date),
            valid_to: self.valid_to.as_deref().and_then(parse_campaign_date),
            manual_state,
            program_type,
        })
    }
}

fn parse_campaign_date(raw: &str) -> Option<NaiveDate> {
    raw.trim().parse().ok()
}

/// Converts a wire campaign list into domain campaigns, dropping the
/// entries that cannot be interpreted.
pub fn campaigns_into_domain(response: CampaignsResponse) -> Vec<Campaign> {
    response
        .campaigns
        .into_iter()
        .filter_map(CampaignDto::into_domain)
        .collect()
}

// =============================================================================
// Submissions
// =============================================================================

/// `SubmitAccrual` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccrualRequest {
    pub client_id: String,

    /// Points or stamps to grant, already computed by the engine.
    pub quantity: i64,

    /// Purchase amount, decimal. Zero for manual stamp grants.
    pub amount: f64,

    /// Correlation reference (`XXXX-XXXX-XXXX`).
    pub reference: String,
}

/// `SubmitRedemption` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionRequest {
    pub client_id: String,
    pub business_id: String,
    pub campaign_id: String,

    /// Correlation reference (`XXXX-XXXX-XXXX`).
    pub reference: String,
}

/// `ValidateTicket` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    pub ticket_id: String,

    /// Claimed purchase amount, decimal.
    pub amount: f64,
}

/// Envelope shared by `SubmitAccrual` and `SubmitRedemption`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    /// Business-rule rejection flag.
    #[serde(default)]
    pub error: bool,

    /// Non-zero on success; zero or absent otherwise.
    #[serde(default)]
    pub transaction_id: i64,

    /// Rejection message, surfaced verbatim to the operator.
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmitResponse {
    /// Success requires a non-zero transaction id AND no error flag;
    /// any other combination is a failure.
    pub fn is_success(&self) -> bool {
        !self.error && self.transaction_id != 0
    }
}

/// `ValidateTicket` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    #[serde(default)]
    pub error: bool,

    #[serde(default)]
    pub message: Option<String>,
}

impl TicketResponse {
    /// A response without the error flag is treated as valid.
    pub fn is_valid(&self) -> bool {
        !self.error
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_kind_codes() {
        let accrual = MovementDto {
            id: "m1".into(),
            kind: "A".into(),
            quantity: 50,
            amount: 500.0,
            reference: "REF".into(),
            date: Some("2026-03-01T12:00:00Z".into()),
        };
        let movement = accrual.into_domain().unwrap();
        assert_eq!(movement.kind, MovementKind::Accrual);
        assert_eq!(movement.amount.cents(), 50000);
        assert!(movement.date.is_some());

        let redemption = MovementDto {
            id: "m2".into(),
            kind: "c".into(),
            quantity: 30,
            amount: 0.0,
            reference: "REF".into(),
            date: None,
        };
        assert_eq!(redemption.into_domain().unwrap().kind, MovementKind::Redemption);
    }

    #[test]
    fn test_unknown_movement_kind_is_dropped() {
        let dto = MovementDto {
            id: "m3".into(),
            kind: "X".into(),
            quantity: 10,
            amount: 0.0,
            reference: String::new(),
            date: None,
        };
        assert!(dto.into_domain().is_none());
    }

    #[test]
    fn test_unparseable_movement_date_keeps_movement() {
        let dto = MovementDto {
            id: "m4".into(),
            kind: "A".into(),
            quantity: 5,
            amount: 10.0,
            reference: String::new(),
            date: Some("yesterday-ish".into()),
        };
        let movement = dto.into_domain().unwrap();
        assert!(movement.date.is_none());
        assert_eq!(movement.quantity, 5);
    }

    #[test]
    fn test_negative_wire_quantity_clamped() {
        let dto = MovementDto {
            id: "m5".into(),
            kind: "A".into(),
            quantity: -7,
            amount: 0.0,
            reference: String::new(),
            date: None,
        };
        assert_eq!(dto.into_domain().unwrap().quantity, 0);
    }

    #[test]
    fn test_campaign_conversion() {
        let dto = CampaignDto {
            id: "c1".into(),
            name: "Free coffee".into(),
            description: String::new(),
            required_quantity: 80,
            reward: "1 coffee".into(),
            valid_from: Some("2026-01-01".into()),
            valid_to: Some("2026-12-31".into()),
            manual_state: Some("Activated".into()),
            program_type: "points".into(),
        };
        let campaign = dto.into_domain().unwrap();
        assert_eq!(campaign.program_type, ProgramType::Points);
        assert_eq!(campaign.manual_state, ManualState::Activated);
        assert!(campaign.valid_from.is_some());
    }

    #[test]
    fn test_campaign_malformed_dates_become_none() {
        let dto = CampaignDto {
            id: "c2".into(),
            name: String::new(),
            description: String::new(),
            required_quantity: 10,
            reward: String::new(),
            valid_from: Some("01/01/2026".into()),
            valid_to: Some("soon".into()),
            manual_state: None,
            program_type: "stamps".into(),
        };
        let campaign = dto.into_domain().unwrap();
        assert!(campaign.valid_from.is_none());
        assert!(campaign.valid_to.is_none());
        assert_eq!(campaign.manual_state, ManualState::Unset);
    }

    #[test]
    fn test_campaign_unknown_program_type_dropped() {
        let dto = CampaignDto {
            id: "c3".into(),
            name: String::new(),
            description: String::new(),
            required_quantity: 10,
            reward: String::new(),
            valid_from: None,
            valid_to: None,
            manual_state: None,
            program_type: "miles".into(),
        };
        assert!(dto.into_domain().is_none());
    }

    #[test]
    fn test_submit_response_success_rule() {
        let ok = SubmitResponse {
            error: false,
            transaction_id: 42,
            message: None,
        };
        assert!(ok.is_success());

        // Zero transaction id is never a success, even without the flag
        let zero_txn = SubmitResponse {
            error: false,
            transaction_id: 0,
            message: None,
        };
        assert!(!zero_txn.is_success());

        let rejected = SubmitResponse {
            error: true,
            transaction_id: 42,
            message: Some("Saldo insuficiente".into()),
        };
        assert!(!rejected.is_success());
    }

    #[test]
    fn test_submit_response_decodes_sparse_json() {
        let response: SubmitResponse = serde_json::from_str(r#"{"error": true}"#).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.transaction_id, 0);
        assert!(response.message.is_none());
    }

    #[test]
    fn test_requests_serialize_camel_case() {
        let request = AccrualRequest {
            client_id: "cl-1".into(),
            quantity: 50,
            amount: 500.0,
            reference: "AB12-CD34-EF56".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["clientId"], "cl-1");
        assert_eq!(json["quantity"], 50);

        let request = TicketRequest {
            ticket_id: "TKT-1".into(),
            amount: 99.5,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["ticketId"], "TKT-1");
    }
}
