//! # Ledger Projection
//!
//! Derives the visible account from the authoritative movement history.
//!
//! ## Projection Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  available_balance = Σ Accrual.quantity − Σ Redemption.quantity         │
//! │                                                                         │
//! │  Movements   A(+50)   A(+12)   R(−30)   A(+5)                           │
//! │  Running      50       62       32       37                             │
//! │                                                                         │
//! │  The account is DERIVED, never stored: it is recomputed from the        │
//! │  full movement sequence every time movements are fetched, and never     │
//! │  cached across sessions as a source of truth.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Movement, MovementKind};

/// One movement paired with the balance after it, for history views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementEntry {
    /// The underlying ledger movement.
    pub movement: Movement,

    /// Balance after applying this movement, in sequence order.
    pub running_balance: i64,
}

/// The derived account state for one client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Account {
    /// Current spendable balance (points or stamps).
    pub available_balance: i64,

    /// Movement history with running balances, in the order the remote
    /// service returned it.
    pub statement: Vec<StatementEntry>,
}

impl Account {
    /// Projects the account from an ordered movement sequence.
    ///
    /// Accruals add, redemptions subtract. The fold is total: a history
    /// that redeems more than it accrued simply yields a negative
    /// balance for the remote side to explain.
    pub fn project(movements: &[Movement]) -> Account {
        let mut balance = 0i64;
        let mut statement = Vec::with_capacity(movements.len());

        for movement in movements {
            match movement.kind {
                MovementKind::Accrual => balance += movement.quantity,
                MovementKind::Redemption => balance -= movement.quantity,
            }
            statement.push(StatementEntry {
                movement: movement.clone(),
                running_balance: balance,
            });
        }

        Account {
            available_balance: balance,
            statement,
        }
    }

    /// An account with no history.
    pub fn empty() -> Account {
        Account::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Amount;

    fn movement(id: &str, kind: MovementKind, quantity: i64) -> Movement {
        Movement {
            id: id.to_string(),
            kind,
            quantity,
            amount: Amount::zero(),
            reference: format!("REF-{}", id),
            date: None,
        }
    }

    #[test]
    fn test_empty_projection() {
        let account = Account::project(&[]);
        assert_eq!(account.available_balance, 0);
        assert!(account.statement.is_empty());
    }

    #[test]
    fn test_accruals_add_redemptions_subtract() {
        let movements = vec![
            movement("1", MovementKind::Accrual, 50),
            movement("2", MovementKind::Accrual, 12),
            movement("3", MovementKind::Redemption, 30),
            movement("4", MovementKind::Accrual, 5),
        ];

        let account = Account::project(&movements);
        assert_eq!(account.available_balance, 37);

        let running: Vec<i64> = account.statement.iter().map(|e| e.running_balance).collect();
        assert_eq!(running, vec![50, 62, 32, 37]);
    }

    #[test]
    fn test_over_redemption_goes_negative() {
        let movements = vec![
            movement("1", MovementKind::Accrual, 10),
            movement("2", MovementKind::Redemption, 25),
        ];

        let account = Account::project(&movements);
        assert_eq!(account.available_balance, -15);
    }

    #[test]
    fn test_projection_is_reproducible() {
        let movements = vec![
            movement("1", MovementKind::Accrual, 80),
            movement("2", MovementKind::Redemption, 80),
        ];

        let first = Account::project(&movements);
        let second = Account::project(&movements);
        assert_eq!(first, second);
        assert_eq!(first.available_balance, 0);
    }
}
