//! # Redemption Processor
//!
//! Orchestrates one redemption attempt from selection to submission.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Redemption Attempt States                            │
//! │                                                                         │
//! │            select_client        select_campaign                         │
//! │   Idle ──────────────► ClientSelected ──────────► CampaignSelected      │
//! │                              ▲                        │    ▲            │
//! │                              │                 submit │    │            │
//! │                              │                        ▼    │ resume_    │
//! │                              │                   Submitting│ after_     │
//! │                              │                        │    │ failure    │
//! │                              │              ┌─────────┴──┐ │            │
//! │                              │              ▼            ▼ │            │
//! │                              │          Succeeded      Failed           │
//! │                              └──────────────────────────┘               │
//! │                                  (selecting again restarts)             │
//! │                                                                         │
//! │  PRECONDITION, not retry-after-failure: the transition into             │
//! │  CampaignSelected is only legal when the campaign is active AND the     │
//! │  account snapshot covers its threshold.                                 │
//! │                                                                         │
//! │  IN-FLIGHT GUARD: at most one submission per attempt is in flight; a    │
//! │  resubmission while Submitting is IGNORED, not queued.                  │
//! │                                                                         │
//! │  AFTER SUCCESS: the balance is re-fetched from the authoritative        │
//! │  ledger, never decremented locally.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failure is always recoverable: the attempt returns to its
//! pre-submission state with the error surfaced, never fatal to the
//! session. Abandonment simply drops the attempt; the remote side
//! effect (if the request landed) is not rolled back.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use lealta_api::wire::{RedemptionRequest, SubmitResponse};
use lealta_api::{ApiResult, LoyaltyApi};
use lealta_core::eligibility::{campaign_active, campaign_redeemable};
use lealta_core::validation::validate_client_id;
use lealta_core::{Account, Campaign};

use crate::account::fetch_account;
use crate::error::{rejection_message, FlowError, FlowResult};
use crate::reference::ReferenceCode;
use crate::session::Session;

// =============================================================================
// States
// =============================================================================

/// Observable state of a redemption attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptState {
    /// Nothing selected yet.
    Idle,
    /// A client (and their account snapshot) is selected.
    ClientSelected,
    /// An active, redeemable campaign is selected.
    CampaignSelected,
    /// A submission is in flight; further submissions are ignored.
    Submitting,
    /// The remote service confirmed the redemption.
    Succeeded,
    /// The last submission was rejected or failed; recoverable.
    Failed,
}

impl AttemptState {
    fn name(&self) -> &'static str {
        match self {
            AttemptState::Idle => "idle",
            AttemptState::ClientSelected => "client selected",
            AttemptState::CampaignSelected => "campaign selected",
            AttemptState::Submitting => "submitting",
            AttemptState::Succeeded => "succeeded",
            AttemptState::Failed => "failed",
        }
    }
}

/// What a call to [`RedemptionAttempt::submit`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RedemptionOutcome {
    /// A submission was already in flight; this call did nothing.
    Ignored,

    /// The redemption was confirmed. The account is the re-fetched
    /// authoritative projection, or `None` when the refresh itself
    /// failed (logged, never blocking).
    Succeeded {
        transaction_id: i64,
        account: Option<Account>,
    },
}

// =============================================================================
// Attempt
// =============================================================================

/// One ephemeral redemption attempt.
///
/// Exists for the duration of one submission; holds the only mutable
/// state the engine owns, and is discarded when the attempt concludes
/// or the view is abandoned.
#[derive(Debug)]
pub struct RedemptionAttempt {
    id: Uuid,
    business_id: String,
    state: AttemptState,
    client_id: Option<String>,
    account: Option<Account>,
    campaign: Option<Campaign>,
    reference: Option<ReferenceCode>,
    last_error: Option<String>,
}

impl RedemptionAttempt {
    /// Starts a fresh attempt for the session's business.
    pub fn new(session: &Session) -> Self {
        RedemptionAttempt {
            id: Uuid::new_v4(),
            business_id: session.business_id.clone(),
            state: AttemptState::Idle,
            client_id: None,
            account: None,
            campaign: None,
            reference: None,
            last_error: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> AttemptState {
        self.state
    }

    /// The campaign currently selected, if any.
    pub fn campaign(&self) -> Option<&Campaign> {
        self.campaign.as_ref()
    }

    /// The reference code generated for the last submission, if any.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_ref().map(ReferenceCode::as_str)
    }

    /// The message of the last failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Selects the client and their current account snapshot.
    ///
    /// Selecting (or re-selecting) a client restarts the attempt: any
    /// selected campaign and prior failure are cleared.
    pub fn select_client(&mut self, client_id: &str, account: Account) -> FlowResult<()> {
        if self.state == AttemptState::Submitting {
            return Err(FlowError::InvalidTransition {
                state: self.state.name(),
                action: "select a client",
            });
        }

        let client_id = validate_client_id(client_id)?;

        self.client_id = Some(client_id);
        self.account = Some(account);
        self.campaign = None;
        self.reference = None;
        self.last_error = None;
        self.state = AttemptState::ClientSelected;
        Ok(())
    }

    /// Selects the campaign to redeem.
    ///
    /// Precondition, not retry-after-failure: the transition is refused
    /// unless the campaign is active today AND the selected account's
    /// balance covers its threshold. On refusal the attempt stays in
    /// its current state.
    pub fn select_campaign(&mut self, campaign: Campaign, today: NaiveDate) -> FlowResult<()> {
        let account = match (&self.state, &self.account) {
            (AttemptState::Submitting, _) | (_, None) => {
                return Err(FlowError::InvalidTransition {
                    state: self.state.name(),
                    action: "select a campaign",
                });
            }
            (_, Some(account)) => account,
        };

        if !campaign_active(&campaign, today) {
            return Err(FlowError::CampaignInactive {
                campaign: campaign.name.clone(),
            });
        }

        if !campaign_redeemable(account.available_balance, campaign.required_quantity) {
            return Err(FlowError::InsufficientBalance {
                balance: account.available_balance,
                required: campaign.required_quantity,
            });
        }

        self.campaign = Some(campaign);
        self.last_error = None;
        self.state = AttemptState::CampaignSelected;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Submission (two-phase, composed by `submit`)
    // -------------------------------------------------------------------------

    /// Phase one: builds the request and moves into `Submitting`.
    ///
    /// Returns `Ok(None)` when a submission is already in flight - the
    /// idempotent guard: the call is ignored, not queued, and no second
    /// external call may be made.
    pub fn begin_submission(&mut self) -> FlowResult<Option<RedemptionRequest>> {
        if self.state == AttemptState::Submitting {
            debug!(attempt = %self.id, "submission already in flight, ignoring");
            return Ok(None);
        }

        if !matches!(self.state, AttemptState::CampaignSelected | AttemptState::Failed) {
            return Err(FlowError::InvalidTransition {
                state: self.state.name(),
                action: "submit",
            });
        }

        let (client_id, campaign) = match (&self.client_id, &self.campaign) {
            (Some(client_id), Some(campaign)) => (client_id.clone(), campaign),
            _ => {
                return Err(FlowError::InvalidTransition {
                    state: self.state.name(),
                    action: "submit",
                });
            }
        };

        let reference = ReferenceCode::generate();
        let request = RedemptionRequest {
            client_id,
            business_id: self.business_id.clone(),
            campaign_id: campaign.id.clone(),
            reference: reference.as_str().to_string(),
        };

        self.reference = Some(reference);
        self.last_error = None;
        self.state = AttemptState::Submitting;
        Ok(Some(request))
    }

    /// Phase two: interprets the remote response.
    ///
    /// Success requires a non-zero transaction identifier and no error
    /// flag; anything else, including a transport failure, lands in
    /// `Failed` with a recoverable error.
    pub fn complete_submission(&mut self, result: ApiResult<SubmitResponse>) -> FlowResult<i64> {
        if self.state != AttemptState::Submitting {
            return Err(FlowError::InvalidTransition {
                state: self.state.name(),
                action: "complete a submission",
            });
        }

        match result {
            Ok(response) if response.is_success() => {
                info!(attempt = %self.id, transaction_id = response.transaction_id, "redemption confirmed");
                self.state = AttemptState::Succeeded;
                Ok(response.transaction_id)
            }
            Ok(response) => {
                let message = rejection_message(response.message);
                self.last_error = Some(message.clone());
                self.state = AttemptState::Failed;
                Err(FlowError::Rejected { message })
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                self.state = AttemptState::Failed;
                Err(FlowError::Transport(err))
            }
        }
    }

    /// Returns a failed attempt to `CampaignSelected` so the operator
    /// can correct and resubmit.
    pub fn resume_after_failure(&mut self) {
        if self.state == AttemptState::Failed {
            self.state = AttemptState::CampaignSelected;
            self.last_error = None;
        }
    }

    /// Submits the attempt and, on success, re-fetches the
    /// authoritative account.
    ///
    /// The balance is NEVER decremented speculatively: the only way it
    /// changes is through the re-projected movement history. A failed
    /// refresh after a confirmed redemption is logged and ignored; the
    /// redemption itself stands.
    pub async fn submit<A: LoyaltyApi + ?Sized>(&mut self, api: &A) -> FlowResult<RedemptionOutcome> {
        let request = match self.begin_submission()? {
            None => return Ok(RedemptionOutcome::Ignored),
            Some(request) => request,
        };

        info!(attempt = %self.id, reference = %request.reference, "submitting redemption");
        let result = api.submit_redemption(&request).await;
        let transaction_id = self.complete_submission(result)?;

        let account = match &self.client_id {
            Some(client_id) => match fetch_account(api, client_id).await {
                Ok(account) => {
                    self.account = Some(account.clone());
                    Some(account)
                }
                Err(err) => {
                    warn!(attempt = %self.id, error = %err, "account refresh after redemption failed");
                    None
                }
            },
            None => None,
        };

        Ok(RedemptionOutcome::Succeeded {
            transaction_id,
            account,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
