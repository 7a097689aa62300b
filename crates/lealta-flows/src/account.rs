//! # Account Fetch
//!
//! Re-derives the visible account from the authoritative movement
//! history, and combines it with campaigns for the portal's progress
//! view.
//!
//! The projection itself is pure (see `lealta_core::ledger`); this
//! module owns the fetch-then-project step and is the ONLY way flows
//! obtain a balance. Nothing here caches: the account is recomputed on
//! every call, exactly as the remote history dictates.

use chrono::NaiveDate;
use tracing::debug;

use lealta_api::wire::{campaigns_into_domain, movements_into_domain};
use lealta_api::LoyaltyApi;
use lealta_core::progress::track_progress;
use lealta_core::validation::validate_client_id;
use lealta_core::{Account, Campaign, CampaignProgress};

use crate::error::FlowResult;
use crate::session::Session;

/// Fetches the movement history and projects the account from it.
pub async fn fetch_account<A: LoyaltyApi + ?Sized>(api: &A, client_id: &str) -> FlowResult<Account> {
    let client_id = validate_client_id(client_id)?;

    let response = api.get_account_movements(&client_id).await?;
    let movements = movements_into_domain(response);
    let account = Account::project(&movements);

    debug!(
        client_id = %client_id,
        balance = account.available_balance,
        movements = account.statement.len(),
        "projected account"
    );
    Ok(account)
}

/// Fetches the campaigns configured for the session's business.
pub async fn fetch_campaigns<A: LoyaltyApi + ?Sized>(
    api: &A,
    session: &Session,
) -> FlowResult<Vec<Campaign>> {
    let response = api.get_active_campaigns(&session.business_id).await?;
    Ok(campaigns_into_domain(response))
}

/// The portal's campaign overview: account plus per-campaign progress.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignOverview {
    /// The projected account the progress was computed against.
    pub account: Account,

    /// Progress for every active campaign in the business's
    /// denomination.
    pub progress: Vec<CampaignProgress>,
}

/// Fetches everything the campaign cards need in one pass.
pub async fn campaign_overview<A: LoyaltyApi + ?Sized>(
    api: &A,
    session: &Session,
    client_id: &str,
    today: NaiveDate,
) -> FlowResult<CampaignOverview> {
    let account = fetch_account(api, client_id).await?;
    let campaigns = fetch_campaigns(api, session).await?;

    let progress = track_progress(
        &campaigns,
        session.program_type,
        account.available_balance,
        today,
    );

    Ok(CampaignOverview { account, progress })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{campaign_dto, movement_dto, FakeLoyaltyApi};
    use lealta_core::ProgramType;

    fn day(d: &str) -> NaiveDate {
        d.parse().unwrap()
    }

    #[tokio::test]
    async fn test_fetch_account_projects_balance() {
        let api = FakeLoyaltyApi::new();
        api.set_movements(vec![
            movement_dto("m1", "A", 50),
            movement_dto("m2", "A", 12),
            movement_dto("m3", "C", 30),
        ]);

        let account = fetch_account(&api, "client-1").await.unwrap();
        assert_eq!(account.available_balance, 32);
        assert_eq!(account.statement.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_account_rejects_empty_client() {
        let api = FakeLoyaltyApi::new();
        let err = fetch_account(&api, "  ").await.unwrap_err();
        assert!(matches!(err, crate::FlowError::Input(_)));
    }

    #[tokio::test]
    async fn test_campaign_overview_filters_and_tracks() {
        let api = FakeLoyaltyApi::new();
        api.set_movements(vec![movement_dto("m1", "A", 79)]);
        api.set_campaigns(vec![
            campaign_dto("c1", 80, "points"),
            campaign_dto("c2", 10, "stamps"),
        ]);

        let session = Session::new("biz-1", ProgramType::Points);
        let overview = campaign_overview(&api, &session, "client-1", day("2026-06-15"))
            .await
            .unwrap();

        assert_eq!(overview.account.available_balance, 79);
        assert_eq!(overview.progress.len(), 1);
        assert_eq!(overview.progress[0].campaign_id, "c1");
        assert!(!overview.progress[0].redeemable);
        assert!((overview.progress[0].percent - 98.75).abs() < 1e-9);
    }
}
