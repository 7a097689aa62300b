//! # lealta-api: Remote Service Boundary
//!
//! The Lealta engine's only boundary is a JSON-over-HTTPS loyalty
//! service. This crate owns that boundary end to end: the wire shapes
//! the service speaks, an async [`LoyaltyApi`] trait describing the six
//! remote operations, and the [`HttpLoyaltyApi`] implementation built
//! on `reqwest`.
//!
//! ## Remote Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GetRules(businessId)          → rules | notFound (→ defaults)          │
//! │  GetAccountMovements(clientId) → ordered movement history               │
//! │  GetActiveCampaigns(businessId)→ campaign list                          │
//! │  SubmitAccrual(...)            → { error, transactionId, message }      │
//! │  SubmitRedemption(...)         → { error, transactionId, message }      │
//! │  ValidateTicket(...)           → { error, message }                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here computes awards or eligibility; that lives in
//! `lealta-core`, and the orchestration in `lealta-flows`.

pub mod client;
pub mod config;
pub mod error;
pub mod wire;

pub use client::{HttpLoyaltyApi, LoyaltyApi};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
