//! # Loyalty Service Client
//!
//! The `LoyaltyApi` trait (the engine's view of the remote service)
//! and its reqwest-backed implementation.
//!
//! ## Call Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  All six operations are fire-and-forget from the engine's view:         │
//! │                                                                         │
//! │  • no retry policy                                                      │
//! │  • no engine-enforced timeout (the transport layer decides)             │
//! │  • no idempotency key beyond the human-readable reference               │
//! │                                                                         │
//! │  A transport failure and a business-rule rejection land in the same     │
//! │  place for callers: a failed, recoverable attempt.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::wire::{
    AccrualRequest, CampaignsResponse, MovementsResponse, RedemptionRequest, RulesDto,
    SubmitResponse, TicketRequest, TicketResponse,
};

// =============================================================================
// Trait
// =============================================================================

/// The engine's only boundary: six operations against the remote
/// loyalty service.
///
/// Flows depend on this trait rather than the HTTP client, so every
/// flow can be driven against an in-memory fake in tests.
#[async_trait]
pub trait LoyaltyApi: Send + Sync {
    /// Fetches the active business configuration.
    ///
    /// `Ok(None)` means no configuration exists upstream; the rules
    /// resolver degrades that to documented defaults, never an error.
    async fn get_rules(&self, business_id: &str) -> ApiResult<Option<RulesDto>>;

    /// Fetches the full movement history for a client.
    async fn get_account_movements(&self, client_id: &str) -> ApiResult<MovementsResponse>;

    /// Fetches the campaigns configured for a business.
    async fn get_active_campaigns(&self, business_id: &str) -> ApiResult<CampaignsResponse>;

    /// Submits a computed accrual.
    async fn submit_accrual(&self, request: &AccrualRequest) -> ApiResult<SubmitResponse>;

    /// Submits a redemption attempt.
    async fn submit_redemption(&self, request: &RedemptionRequest) -> ApiResult<SubmitResponse>;

    /// Verifies a purchase ticket before a ticket-gated accrual.
    async fn validate_ticket(&self, request: &TicketRequest) -> ApiResult<TicketResponse>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// `LoyaltyApi` over JSON-over-HTTPS.
#[derive(Debug, Clone)]
pub struct HttpLoyaltyApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpLoyaltyApi {
    /// Creates a client against the configured service.
    ///
    /// Deliberately no `.timeout(...)` here: the engine enforces none,
    /// a hung call stays in flight until the transport resolves.
    pub fn new(config: ApiConfig) -> Self {
        HttpLoyaltyApi {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.config.endpoint(path)?;
        debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let url = self.config.endpoint(path)?;
        debug!(%url, "POST");

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LoyaltyApi for HttpLoyaltyApi {
    async fn get_rules(&self, business_id: &str) -> ApiResult<Option<RulesDto>> {
        let url = self.config.endpoint(&format!("businesses/{}/rules", business_id))?;
        debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        // notFound is a normal outcome for an unconfigured business
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }

        Ok(Some(response.json().await?))
    }

    async fn get_account_movements(&self, client_id: &str) -> ApiResult<MovementsResponse> {
        self.get_json(&format!("clients/{}/movements", client_id)).await
    }

    async fn get_active_campaigns(&self, business_id: &str) -> ApiResult<CampaignsResponse> {
        self.get_json(&format!("businesses/{}/campaigns", business_id)).await
    }

    async fn submit_accrual(&self, request: &AccrualRequest) -> ApiResult<SubmitResponse> {
        self.post_json("accruals", request).await
    }

    async fn submit_redemption(&self, request: &RedemptionRequest) -> ApiResult<SubmitResponse> {
        self.post_json("redemptions", request).await
    }

    async fn validate_ticket(&self, request: &TicketRequest) -> ApiResult<TicketResponse> {
        self.post_json("tickets/validate", request).await
    }
}
