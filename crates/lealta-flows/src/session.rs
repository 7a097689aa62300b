//! # Session Context
//!
//! The explicit, passed-down context every flow receives.
//!
//! There are no ambient singletons in this engine: the portal builds
//! one `Session` when the operator's request scope starts and hands it
//! to each flow that needs to know which business it is acting for.

use serde::{Deserialize, Serialize};

use lealta_core::ProgramType;

/// Per-request-scope context for the acting business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The business the operator is acting for.
    pub business_id: String,

    /// The business's program denomination. The rules endpoint does not
    /// carry it, so the session does.
    pub program_type: ProgramType,

    /// Whether purchase-based accruals require a validated ticket
    /// before submission is enabled.
    pub ticket_gated: bool,
}

impl Session {
    /// Creates a session for one business.
    pub fn new(business_id: impl Into<String>, program_type: ProgramType) -> Self {
        Session {
            business_id: business_id.into(),
            program_type,
            ticket_gated: false,
        }
    }

    /// Enables the ticket gate for purchase-based accruals.
    pub fn with_ticket_gate(mut self) -> Self {
        self.ticket_gated = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_builder() {
        let session = Session::new("biz-1", ProgramType::Points);
        assert!(!session.ticket_gated);

        let gated = Session::new("biz-1", ProgramType::Points).with_ticket_gate();
        assert!(gated.ticket_gated);
    }
}
