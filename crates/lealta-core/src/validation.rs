//! # Validation Module
//!
//! Operator-input validation for the loyalty engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Portal forms                                                  │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate operator feedback                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Blocking checks that gate submission                               │
//! │  └── Same rules regardless of which form called                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote service                                                │
//! │  └── Authoritative rejection with a message we surface verbatim         │
//! │                                                                         │
//! │  Defense in depth: a failed check here disables submission locally;     │
//! │  nothing in this module is fatal to the session.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::accrual::{MAX_MANUAL_STAMPS, MIN_MANUAL_STAMPS};
use crate::amount::Amount;
use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a purchase ticket identifier.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Returns
/// The trimmed identifier, which is what the validator sends upstream.
pub fn validate_ticket_id(ticket_id: &str) -> ValidationResult<String> {
    let ticket_id = ticket_id.trim();

    if ticket_id.is_empty() {
        return Err(ValidationError::Required {
            field: "ticket".to_string(),
        });
    }

    if ticket_id.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "ticket".to_string(),
            max: 50,
        });
    }

    if !ticket_id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "ticket".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(ticket_id.to_string())
}

/// Validates a client identifier.
///
/// The portal passes these through from its own client list; the only
/// local rule is that an empty id never reaches the wire.
pub fn validate_client_id(client_id: &str) -> ValidationResult<String> {
    let client_id = client_id.trim();

    if client_id.is_empty() {
        return Err(ValidationError::Required {
            field: "client".to_string(),
        });
    }

    Ok(client_id.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the claimed amount on a ticket validation.
///
/// ## Rules
/// - Must be strictly positive; a zero-amount ticket cannot gate an
///   accrual
pub fn validate_claimed_amount(amount: Amount) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Validates an operator-supplied manual stamp count.
///
/// ## Rules
/// - Must be between 1 and 10 (policy bound, see
///   [`crate::accrual::MAX_MANUAL_STAMPS`])
pub fn validate_manual_stamp_count(count: i64) -> ValidationResult<()> {
    if !crate::accrual::manual_stamps_in_bounds(count) {
        return Err(ValidationError::OutOfRange {
            field: "stamps".to_string(),
            min: MIN_MANUAL_STAMPS,
            max: MAX_MANUAL_STAMPS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ticket_id() {
        assert_eq!(validate_ticket_id("TKT-00123").unwrap(), "TKT-00123");
        assert_eq!(validate_ticket_id("  TKT_9  ").unwrap(), "TKT_9");

        assert!(validate_ticket_id("").is_err());
        assert!(validate_ticket_id("   ").is_err());
        assert!(validate_ticket_id("has space").is_err());
        assert!(validate_ticket_id(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_client_id() {
        assert_eq!(validate_client_id("client-42").unwrap(), "client-42");
        assert!(validate_client_id("").is_err());
        assert!(validate_client_id("   ").is_err());
    }

    #[test]
    fn test_validate_claimed_amount() {
        assert!(validate_claimed_amount(Amount::from_decimal(10.0)).is_ok());
        assert!(validate_claimed_amount(Amount::zero()).is_err());
        assert!(validate_claimed_amount(Amount::from_decimal(-1.0)).is_err());
    }

    #[test]
    fn test_validate_manual_stamp_count() {
        assert!(validate_manual_stamp_count(1).is_ok());
        assert!(validate_manual_stamp_count(10).is_ok());

        assert!(validate_manual_stamp_count(0).is_err());
        assert!(validate_manual_stamp_count(11).is_err());
    }
}
