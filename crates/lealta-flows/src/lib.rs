//! # lealta-flows: Flow Orchestration for the Lealta Portal
//!
//! This crate wires the pure calculation core to the remote loyalty
//! service: every portal interaction (registering a purchase, tracking
//! campaign progress, redeeming a reward, validating a ticket) is one
//! flow here, driven against the [`lealta_api::LoyaltyApi`] trait so it
//! can run against the real service or an in-memory fake.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lealta Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Portal (out of scope)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lealta-flows (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────────┐          │   │
//! │  │   │  rules  │ │ accrual │ │  ticket  │ │ redemption │          │   │
//! │  │   │resolver │ │  flow   │ │   gate   │ │  attempt   │          │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └────────────┘          │   │
//! │  │        ┌─────────┐ ┌─────────┐ ┌───────────┐                   │   │
//! │  │        │ session │ │ account │ │ reference │                   │   │
//! │  │        └─────────┘ └─────────┘ └───────────┘                   │   │
//! │  └──────────┬─────────────────────────────────────┬────────────────┘   │
//! │             │                                     │                    │
//! │  ┌──────────▼──────────────┐   ┌──────────────────▼────────────────┐   │
//! │  │      lealta-core        │   │           lealta-api              │   │
//! │  │  pure calculation rules │   │  JSON-over-HTTPS service client   │   │
//! │  └─────────────────────────┘   └───────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`] - Explicit per-request-scope context (no singletons)
//! - [`rules`] - Infallible business-rules resolver with defaults
//! - [`accrual`] - Purchase registration and manual stamp grants
//! - [`ticket`] - Pre-accrual ticket validation gate
//! - [`account`] - Account projection fetch and campaign overview
//! - [`redemption`] - Redemption attempt state machine
//! - [`reference`] - Human-readable correlation codes
//! - [`error`] - The flow error taxonomy
//!
//! ## Design Principles
//!
//! 1. **Trait at the boundary**: every flow is generic over `LoyaltyApi`
//! 2. **Authoritative balance**: after any confirmed submission the
//!    account is re-fetched and re-projected, never adjusted locally
//! 3. **Nothing is fatal**: every failure returns control to a state the
//!    operator can correct and resubmit from
//! 4. **Remote rejections verbatim**: the service's message IS the
//!    operator-facing message

// =============================================================================
// Module Declarations
// =============================================================================

pub mod account;
pub mod accrual;
pub mod error;
pub mod redemption;
pub mod reference;
pub mod rules;
pub mod session;
pub mod ticket;

#[cfg(test)]
pub(crate) mod testutil;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use account::{campaign_overview, fetch_account, fetch_campaigns, CampaignOverview};
pub use accrual::{register_manual_stamps, register_purchase, AccrualReceipt};
pub use error::{ErrorCategory, FlowError, FlowResult};
pub use redemption::{AttemptState, RedemptionAttempt, RedemptionOutcome};
pub use reference::ReferenceCode;
pub use rules::resolve_rules;
pub use session::Session;
pub use ticket::{TicketGate, TicketState};
