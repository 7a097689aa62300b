//! # Rules Resolver
//!
//! Fetches the active business configuration and centralizes ALL
//! defaulting, so every other component can assume a fully-populated
//! `BusinessRules`.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  resolve_rules NEVER fails the caller.                                  │
//! │                                                                         │
//! │  upstream rules found   → converted to engine units (cents, bps)        │
//! │  upstream notFound      → documented defaults                           │
//! │  transport failure      → documented defaults (warned, not surfaced)    │
//! │                                                                         │
//! │  Defaults: minimum $0, accrual 10%, accumulable false.                  │
//! │  Accrual must remain possible even for unconfigured businesses.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use lealta_api::wire::RulesDto;
use lealta_api::LoyaltyApi;
use lealta_core::{AccrualRate, Amount, BusinessRules};

use crate::session::Session;

/// Resolves the business rules for the session's business.
///
/// Infallible by contract: absence of configuration (and any failure to
/// obtain it) degrades to the documented fallback instead of
/// propagating an error.
pub async fn resolve_rules<A: LoyaltyApi + ?Sized>(api: &A, session: &Session) -> BusinessRules {
    match api.get_rules(&session.business_id).await {
        Ok(Some(dto)) => {
            debug!(business_id = %session.business_id, "resolved business rules");
            rules_from_wire(dto, session)
        }
        Ok(None) => {
            info!(business_id = %session.business_id, "no rules configured, using defaults");
            BusinessRules::fallback(session.program_type)
        }
        Err(err) => {
            warn!(business_id = %session.business_id, error = %err, "rules fetch failed, using defaults");
            BusinessRules::fallback(session.program_type)
        }
    }
}

/// Converts the wire configuration into engine units.
///
/// A negative minimum is nonsense upstream data and clamps to zero; the
/// percentage clamp lives in [`AccrualRate::from_percentage`].
fn rules_from_wire(dto: RulesDto, session: &Session) -> BusinessRules {
    let minimum = Amount::from_decimal(dto.minimum_amount);
    let minimum = if minimum.is_negative() {
        Amount::zero()
    } else {
        minimum
    };

    BusinessRules {
        program_type: session.program_type,
        minimum_amount: minimum,
        accrual_rate: AccrualRate::from_percentage(dto.percentage),
        accumulable: dto.accumulable,
        notes: dto.notes.filter(|n| !n.trim().is_empty()),
    }
}
