//! Ledger readers
//!
//! Balance and project list queries. Both are read-only and safe to repeat.

use alloy_primitives::Address;
use futures_util::future::join_all;

use crate::error::DappResult;
use crate::ledger::Ledger;
use crate::project::Project;
use crate::units::{self, BALANCE_PLACES};

/// Token balance of `account`, in whole tokens rounded to two places
pub async fn read_balance<L: Ledger + ?Sized>(ledger: &L, account: Address) -> DappResult<String> {
    let raw = ledger.token_balance(account).await?;
    let balance = units::format_amount(raw, BALANCE_PLACES);
    tracing::debug!(%account, %balance, "balance read");
    Ok(balance)
}

/// Fetch every project in ledger order.
///
/// One `readProject` per index is issued concurrently. All reads are
/// awaited; if any failed, the error of the lowest failing index is
/// returned and the other results are dropped.
pub async fn read_all_projects<L: Ledger + ?Sized>(ledger: &L) -> DappResult<Vec<Project>> {
    let count = ledger.total_projects().await?;
    tracing::debug!(count, "reading projects");

    let reads = (0..count).map(|index| async move {
        ledger
            .read_project(index)
            .await
            .map(|record| Project::new(index, record))
    });

    join_all(reads).await.into_iter().collect()
}
