//! # Ticket Validator
//!
//! The pre-accrual gate for ticket-gated businesses.
//!
//! ## Gate Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         TicketGate States                               │
//! │                                                                         │
//! │            validate() ok                                                │
//! │  Unverified ──────────────► Verified { ticket_id, amount }              │
//! │      ▲   │                        │                                     │
//! │      │   │ validate() rejected    │ ticket_edited(different id)         │
//! │      │   ▼                        ▼                                     │
//! │      │  Rejected { message }   Unverified                               │
//! │      │   │                                                              │
//! │      └───┘ ticket_edited() / validate() retried                         │
//! │                                                                         │
//! │  A passing verdict unlocks the rest of the purchase-registration       │
//! │  form. Re-entering the ticket identifier invalidates any prior          │
//! │  verdict: validation is never cached across edits.                      │
//! │                                                                         │
//! │  Failures are locally recoverable and re-triggerable without limit;    │
//! │  there is no backoff or lockout.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use lealta_api::wire::TicketRequest;
use lealta_api::LoyaltyApi;
use lealta_core::validation::{validate_claimed_amount, validate_ticket_id};
use lealta_core::Amount;

use crate::error::{rejection_message, FlowError, FlowResult};

/// Verdict state of the ticket gate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TicketState {
    /// No verdict yet, or a prior verdict was invalidated by an edit.
    #[default]
    Unverified,

    /// The remote system recognized the ticket at this amount.
    Verified { ticket_id: String, amount: Amount },

    /// The remote system rejected the ticket; message shown verbatim.
    Rejected { message: String },
}

/// The pre-accrual ticket gate for one purchase-registration form.
#[derive(Debug, Clone, Default)]
pub struct TicketGate {
    state: TicketState,
}

impl TicketGate {
    /// A gate with no verdict.
    pub fn new() -> Self {
        TicketGate::default()
    }

    /// Current verdict.
    pub fn state(&self) -> &TicketState {
        &self.state
    }

    /// Whether the gate currently passes for this exact ticket and
    /// amount. The remainder of the purchase form stays locked until
    /// this is true.
    pub fn is_verified_for(&self, ticket_id: &str, amount: Amount) -> bool {
        matches!(
            &self.state,
            TicketState::Verified { ticket_id: verified_id, amount: verified_amount }
                if verified_id == ticket_id.trim() && *verified_amount == amount
        )
    }

    /// Notifies the gate that the operator edited the ticket field.
    ///
    /// Any verdict that does not match the current input is discarded:
    /// validation must be re-run after an edit, never reused.
    pub fn ticket_edited(&mut self, current_input: &str) {
        match &self.state {
            TicketState::Verified { ticket_id, .. } if ticket_id == current_input.trim() => {}
            TicketState::Unverified => {}
            _ => {
                debug!("ticket edited, discarding prior verdict");
                self.state = TicketState::Unverified;
            }
        }
    }

    /// Runs the remote validation for a ticket id and claimed amount.
    ///
    /// On success the gate moves to `Verified` and unlocks the rest of
    /// the form. On rejection or transport failure the gate is left
    /// re-triggerable; the error carries what the portal should show.
    pub async fn validate<A: LoyaltyApi + ?Sized>(
        &mut self,
        api: &A,
        ticket_id: &str,
        amount: Amount,
    ) -> FlowResult<()> {
        let ticket_id = validate_ticket_id(ticket_id)?;
        validate_claimed_amount(amount)?;

        // A fresh attempt always starts from no verdict
        self.state = TicketState::Unverified;

        let request = TicketRequest {
            ticket_id: ticket_id.clone(),
            amount: amount.to_decimal(),
        };
        let response = api.validate_ticket(&request).await?;

        if response.is_valid() {
            info!(ticket_id = %ticket_id, "ticket verified");
            self.state = TicketState::Verified { ticket_id, amount };
            Ok(())
        } else {
            let message = rejection_message(response.message);
            self.state = TicketState::Rejected {
                message: message.clone(),
            };
            Err(FlowError::Rejected { message })
        }
    }
}
