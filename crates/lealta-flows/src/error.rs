//! # Flow Error Types
//!
//! The error surface the portal sees from every flow.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Flow Error Categories                             │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │   Validation     │  │    External      │  │     Transport        │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  Input(...)      │  │  Rejected        │  │  Transport           │  │
//! │  │  BelowMinimum    │  │  (verbatim       │  │  (generic            │  │
//! │  │  NothingToAward  │  │   remote         │  │   connection-error   │  │
//! │  │  TicketRequired  │  │   message)       │  │   message)           │  │
//! │  │  CampaignInactive│  │                  │  │                      │  │
//! │  │  ...             │  │                  │  │                      │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  Configuration-absent is NOT here: the rules resolver degrades it to   │
//! │  defaults and the caller never sees an error.                          │
//! │                                                                         │
//! │  NOTHING in this engine is fatal: every variant returns control to a   │
//! │  state from which the operator can correct input and resubmit.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use lealta_api::ApiError;
use lealta_core::{Amount, ValidationError};

/// Result type alias for flow operations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Broad category of a flow error, for presentation dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Local input problem; submission stays disabled until corrected.
    Validation,
    /// The remote service rejected the operation; its message is shown
    /// verbatim.
    External,
    /// Network/decode failure; shown as a generic connection error.
    Transport,
}

/// Everything that can go wrong in a flow.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Operator input failed a local check.
    #[error(transparent)]
    Input(#[from] ValidationError),

    /// Purchase amount is below the business's configured minimum.
    #[error("Purchase amount {amount} is below the configured minimum {minimum}")]
    BelowMinimum { amount: Amount, minimum: Amount },

    /// The purchase qualifies for nothing (zero award).
    #[error("This purchase does not qualify for an award")]
    NothingToAward,

    /// A ticket-gated business requires a validated ticket first.
    #[error("The ticket must be validated before registering this purchase")]
    TicketRequired,

    /// Manual stamp grants only exist for stamp programs.
    #[error("Manual stamps are only available to stamp-mode businesses")]
    NotStampProgram,

    /// The selected campaign is not active today.
    #[error("Campaign '{campaign}' is not currently active")]
    CampaignInactive { campaign: String },

    /// The client's balance does not cover the campaign threshold.
    #[error("Balance {balance} does not cover the required {required}")]
    InsufficientBalance { balance: i64, required: i64 },

    /// An operation was requested from a state that does not allow it.
    #[error("Cannot {action} while the attempt is {state}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    /// The remote service rejected the operation with a message.
    #[error("{message}")]
    Rejected { message: String },

    /// The remote service could not be reached or answered garbage.
    #[error("Could not reach the loyalty service: {0}")]
    Transport(#[from] ApiError),
}

impl FlowError {
    /// The presentation category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FlowError::Input(_)
            | FlowError::BelowMinimum { .. }
            | FlowError::NothingToAward
            | FlowError::TicketRequired
            | FlowError::NotStampProgram
            | FlowError::CampaignInactive { .. }
            | FlowError::InsufficientBalance { .. }
            | FlowError::InvalidTransition { .. } => ErrorCategory::Validation,
            FlowError::Rejected { .. } => ErrorCategory::External,
            FlowError::Transport(_) => ErrorCategory::Transport,
        }
    }
}

/// Fallback message when the remote sets the error flag without one.
pub(crate) fn rejection_message(message: Option<String>) -> String {
    match message {
        Some(m) if !m.trim().is_empty() => m,
        _ => "The loyalty service rejected the operation".to_string(),
    }
}
