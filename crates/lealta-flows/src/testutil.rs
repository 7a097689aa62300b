//! In-memory `LoyaltyApi` double for flow tests.
//!
//! Queries serve configured state; submissions pop from per-operation
//! response queues. Every operation counts its calls so tests can
//! assert that a blocked flow made no external call at all.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use lealta_api::wire::{
    AccrualRequest, CampaignDto, CampaignsResponse, MovementDto, MovementsResponse,
    RedemptionRequest, RulesDto, SubmitResponse, TicketRequest, TicketResponse,
};
use lealta_api::{ApiError, ApiResult, LoyaltyApi};

#[derive(Default)]
pub struct FakeLoyaltyApi {
    rules: Mutex<Option<RulesDto>>,
    movements: Mutex<Vec<MovementDto>>,
    campaigns: Mutex<Vec<CampaignDto>>,

    ticket_responses: Mutex<VecDeque<TicketResponse>>,
    accrual_responses: Mutex<VecDeque<SubmitResponse>>,
    redemption_responses: Mutex<VecDeque<SubmitResponse>>,

    last_accrual: Mutex<Option<AccrualRequest>>,
    last_redemption: Mutex<Option<RedemptionRequest>>,

    fail_all: AtomicBool,
    fail_movements: AtomicBool,

    rules_count: AtomicUsize,
    movement_count: AtomicUsize,
    campaign_count: AtomicUsize,
    accrual_count: AtomicUsize,
    redemption_count: AtomicUsize,
    ticket_count: AtomicUsize,
}

impl FakeLoyaltyApi {
    pub fn new() -> Self {
        FakeLoyaltyApi::default()
    }

    // --- configuration -------------------------------------------------------

    pub fn set_rules(&self, rules: RulesDto) {
        *self.rules.lock().expect("lock") = Some(rules);
    }

    pub fn set_movements(&self, movements: Vec<MovementDto>) {
        *self.movements.lock().expect("lock") = movements;
    }

    pub fn set_campaigns(&self, campaigns: Vec<CampaignDto>) {
        *self.campaigns.lock().expect("lock") = campaigns;
    }

    pub fn push_ticket_response(&self, response: TicketResponse) {
        self.ticket_responses.lock().expect("lock").push_back(response);
    }

    pub fn push_accrual_response(&self, response: SubmitResponse) {
        self.accrual_responses.lock().expect("lock").push_back(response);
    }

    pub fn push_redemption_response(&self, response: SubmitResponse) {
        self.redemption_responses.lock().expect("lock").push_back(response);
    }

    /// Makes every operation fail with a transport error.
    pub fn fail_transport(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    /// Makes only the movement fetch fail with a transport error.
    pub fn fail_movements(&self, fail: bool) {
        self.fail_movements.store(fail, Ordering::SeqCst);
    }

    // --- observations --------------------------------------------------------

    pub fn movement_calls(&self) -> usize {
        self.movement_count.load(Ordering::SeqCst)
    }

    pub fn accrual_calls(&self) -> usize {
        self.accrual_count.load(Ordering::SeqCst)
    }

    pub fn redemption_calls(&self) -> usize {
        self.redemption_count.load(Ordering::SeqCst)
    }

    pub fn ticket_calls(&self) -> usize {
        self.ticket_count.load(Ordering::SeqCst)
    }

    pub fn last_accrual_request(&self) -> Option<AccrualRequest> {
        self.last_accrual.lock().expect("lock").clone()
    }

    pub fn last_redemption_request(&self) -> Option<RedemptionRequest> {
        self.last_redemption.lock().expect("lock").clone()
    }

    fn check_transport(&self) -> ApiResult<()> {
        if self.fail_all.load(Ordering::SeqCst) {
            Err(ApiError::Transport("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LoyaltyApi for FakeLoyaltyApi {
    async fn get_rules(&self, _business_id: &str) -> ApiResult<Option<RulesDto>> {
        self.rules_count.fetch_add(1, Ordering::SeqCst);
        self.check_transport()?;
        Ok(self.rules.lock().expect("lock").clone())
    }

    async fn get_account_movements(&self, _client_id: &str) -> ApiResult<MovementsResponse> {
        self.movement_count.fetch_add(1, Ordering::SeqCst);
        self.check_transport()?;
        if self.fail_movements.load(Ordering::SeqCst) {
            return Err(ApiError::Transport("connection refused".into()));
        }
        Ok(MovementsResponse {
            movements: self.movements.lock().expect("lock").clone(),
        })
    }

    async fn get_active_campaigns(&self, _business_id: &str) -> ApiResult<CampaignsResponse> {
        self.campaign_count.fetch_add(1, Ordering::SeqCst);
        self.check_transport()?;
        Ok(CampaignsResponse {
            campaigns: self.campaigns.lock().expect("lock").clone(),
        })
    }

    async fn submit_accrual(&self, request: &AccrualRequest) -> ApiResult<SubmitResponse> {
        self.accrual_count.fetch_add(1, Ordering::SeqCst);
        self.check_transport()?;
        *self.last_accrual.lock().expect("lock") = Some(request.clone());
        Ok(self
            .accrual_responses
            .lock()
            .expect("lock")
            .pop_front()
            .expect("no queued accrual response"))
    }

    async fn submit_redemption(&self, request: &RedemptionRequest) -> ApiResult<SubmitResponse> {
        self.redemption_count.fetch_add(1, Ordering::SeqCst);
        self.check_transport()?;
        *self.last_redemption.lock().expect("lock") = Some(request.clone());
        Ok(self
            .redemption_responses
            .lock()
            .expect("lock")
            .pop_front()
            .expect("no queued redemption response"))
    }

    async fn validate_ticket(&self, _request: &TicketRequest) -> ApiResult<TicketResponse> {
        self.ticket_count.fetch_add(1, Ordering::SeqCst);
        self.check_transport()?;
        Ok(self
            .ticket_responses
            .lock()
            .expect("lock")
            .pop_front()
            .expect("no queued ticket response"))
    }
}

// =============================================================================
// Wire Fixtures
// =============================================================================

/// An accrual ("A") or redemption ("C") movement with a fixed amount
/// and timestamp.
pub fn movement_dto(id: &str, kind: &str, quantity: i64) -> MovementDto {
    MovementDto {
        id: id.to_string(),
        kind: kind.to_string(),
        quantity,
        amount: 100.0,
        reference: format!("REF-{id}"),
        date: Some("2026-06-01T12:00:00Z".to_string()),
    }
}

/// A manually-activated campaign, so it is active on any test date.
pub fn campaign_dto(id: &str, required: i64, program_type: &str) -> CampaignDto {
    CampaignDto {
        id: id.to_string(),
        name: format!("Campaign {id}"),
        description: String::new(),
        required_quantity: required,
        reward: "1 reward".to_string(),
        valid_from: None,
        valid_to: None,
        manual_state: Some("activated".to_string()),
        program_type: program_type.to_string(),
    }
}
