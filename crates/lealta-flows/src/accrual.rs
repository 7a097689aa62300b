//! # Purchase Registration Flow
//!
//! Turns an operator-entered purchase (or a manual stamp grant) into a
//! submitted accrual.
//!
//! ## Registration Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Purchase path                                                          │
//! │                                                                         │
//! │  amount ──► ticket gate (when the business is ticket-gated)             │
//! │        ──► minimum-amount eligibility                                   │
//! │        ──► award calculation (points or stamps, by program type)        │
//! │        ──► SubmitAccrual with a fresh reference code                    │
//! │        ──► authoritative account re-fetch                               │
//! │                                                                         │
//! │  Manual stamp path (no purchase amount at all)                          │
//! │                                                                         │
//! │  count (1-10) ──► SubmitAccrual(amount = 0) ──► account re-fetch        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};

use lealta_api::wire::AccrualRequest;
use lealta_api::LoyaltyApi;
use lealta_core::accrual::award_for_purchase;
use lealta_core::eligibility::minimum_amount_met;
use lealta_core::validation::{validate_client_id, validate_manual_stamp_count};
use lealta_core::{Account, Amount, BusinessRules, ProgramType};

use crate::account::fetch_account;
use crate::error::{rejection_message, FlowError, FlowResult};
use crate::reference::ReferenceCode;
use crate::session::Session;
use crate::ticket::TicketGate;

/// What a confirmed accrual produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AccrualReceipt {
    /// Points or stamps granted.
    pub quantity: i64,

    /// Remote transaction identifier.
    pub transaction_id: i64,

    /// Correlation reference sent with the submission.
    pub reference: String,

    /// The re-fetched authoritative account, or `None` when the refresh
    /// failed (logged, never blocking - the accrual itself stands).
    pub account: Option<Account>,
}

/// Registers a purchase-based accrual.
///
/// For ticket-gated businesses the `ticket` gate must already hold a
/// verdict for this exact amount; re-validating after an edit is the
/// gate's job, not this function's.
pub async fn register_purchase<A: LoyaltyApi + ?Sized>(
    api: &A,
    session: &Session,
    client_id: &str,
    ticket_id: &str,
    amount: Amount,
    rules: &BusinessRules,
    ticket: Option<&TicketGate>,
) -> FlowResult<AccrualReceipt> {
    let client_id = validate_client_id(client_id)?;

    if session.ticket_gated {
        let verified = ticket
            .map(|gate| gate.is_verified_for(ticket_id, amount))
            .unwrap_or(false);
        if !verified {
            return Err(FlowError::TicketRequired);
        }
    }

    if !minimum_amount_met(amount, rules) {
        return Err(FlowError::BelowMinimum {
            amount,
            minimum: rules.minimum_amount,
        });
    }

    let quantity = award_for_purchase(amount, rules);
    if quantity == 0 {
        // Covers the stamp-mode minimum of 0 as well: 0 means "not
        // eligible", never "infinite stamps".
        return Err(FlowError::NothingToAward);
    }

    submit_accrual(api, client_id, quantity, amount).await
}

/// Registers a manual stamp grant, bypassing the purchase amount
/// entirely.
///
/// Only stamp-mode businesses have this path, and the count is bounded
/// by policy (1-10).
pub async fn register_manual_stamps<A: LoyaltyApi + ?Sized>(
    api: &A,
    session: &Session,
    client_id: &str,
    count: i64,
) -> FlowResult<AccrualReceipt> {
    if session.program_type != ProgramType::Stamps {
        return Err(FlowError::NotStampProgram);
    }

    let client_id = validate_client_id(client_id)?;
    validate_manual_stamp_count(count)?;

    submit_accrual(api, client_id, count, Amount::zero()).await
}

/// Shared submission tail: send, interpret, re-fetch.
async fn submit_accrual<A: LoyaltyApi + ?Sized>(
    api: &A,
    client_id: String,
    quantity: i64,
    amount: Amount,
) -> FlowResult<AccrualReceipt> {
    let reference = ReferenceCode::generate();
    let request = AccrualRequest {
        client_id: client_id.clone(),
        quantity,
        amount: amount.to_decimal(),
        reference: reference.as_str().to_string(),
    };

    info!(client_id = %client_id, quantity, reference = %reference, "submitting accrual");
    let response = api.submit_accrual(&request).await?;

    if !response.is_success() {
        return Err(FlowError::Rejected {
            message: rejection_message(response.message),
        });
    }

    // Re-derive the balance from the authoritative ledger; a refresh
    // failure must not unwind a confirmed accrual.
    let account = match fetch_account(api, &client_id).await {
        Ok(account) => Some(account),
        Err(err) => {
            warn!(client_id = %client_id, error = %err, "account refresh after accrual failed");
            None
        }
    };

    Ok(AccrualReceipt {
        quantity,
        transaction_id: response.transaction_id,
        reference: reference.into(),
        account,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
