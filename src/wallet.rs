//! Wallet connector
//!
//! Asks the injected wallet for permission, picks the default account and
//! binds a ledger client to it.

use alloy_primitives::Address;
use async_trait::async_trait;
use serde_json::json;

use crate::config::Config;
use crate::error::{DappError, DappResult};
use crate::rpc::{rpc_call, RpcLedger, Transport};
use crate::surface::Surface;

/// Shown while the wallet's permission prompt is open
pub const APPROVE_PROMPT: &str = "⚠️ Please approve this DApp to use it.";

/// A wallet that signs on behalf of its accounts
#[async_trait(?Send)]
pub trait WalletProvider: Transport {
    /// Request access and return the exposed accounts, default first
    async fn enable(&self) -> DappResult<Vec<Address>> {
        rpc_call(self, "eth_requestAccounts", json!([])).await
    }
}

/// A connected wallet: the signing account and its ledger client
pub struct Session<L> {
    pub account: Address,
    pub ledger: L,
}

/// Connect to `provider` and bind a ledger client to its default account.
///
/// Fails with [`DappError::WalletUnavailable`] when there is no provider.
/// The approval prompt notification is cleared whether or not the user
/// accepts.
pub async fn connect<P, S>(
    provider: Option<P>,
    config: &Config,
    surface: &S,
) -> DappResult<Session<RpcLedger<P>>>
where
    P: WalletProvider,
    S: Surface + ?Sized,
{
    let provider = provider.ok_or(DappError::WalletUnavailable)?;

    surface.notify(APPROVE_PROMPT);
    let accounts = provider.enable().await;
    surface.clear();

    let account = accounts?
        .into_iter()
        .next()
        .ok_or_else(|| DappError::Rpc("wallet exposed no accounts".to_string()))?;
    tracing::info!(%account, "wallet connected");

    let ledger = RpcLedger::new(
        provider,
        account,
        config.network.contracts(),
        config.transactions.receipt_polling(),
    );
    Ok(Session { account, ledger })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::surface::Notification;
    use crate::testing::{MockTransport, RecordingSurface};

    #[tokio::test]
    async fn test_missing_wallet() {
        let surface = RecordingSurface::default();
        let result = connect(None::<MockTransport>, &Config::default(), &surface).await;
        assert!(matches!(result, Err(DappError::WalletUnavailable)));
        assert!(surface.history().is_empty());
    }

    #[tokio::test]
    async fn test_connect_uses_first_account() {
        let transport = MockTransport::new();
        transport.respond(
            "eth_requestAccounts",
            json!([Address::repeat_byte(0x01), Address::repeat_byte(0x02)]),
        );
        let surface = RecordingSurface::default();

        let session = connect(Some(transport), &Config::default(), &surface)
            .await
            .unwrap();
        assert_eq!(session.account, Address::repeat_byte(0x01));
        assert_eq!(session.ledger.account(), Address::repeat_byte(0x01));
        assert_eq!(
            session.ledger.crowdfunding_address(),
            Config::default().network.contracts().crowdfunding
        );
        assert_eq!(surface.history(), vec![APPROVE_PROMPT.to_string()]);
        assert_eq!(surface.notification(), Notification::Hidden);
    }

    #[tokio::test]
    async fn test_rejection_clears_prompt() {
        let transport = MockTransport::new();
        transport.fail("eth_requestAccounts", DappError::UserRejected);
        let surface = RecordingSurface::default();

        let result = connect(Some(transport), &Config::default(), &surface).await;
        assert!(matches!(result, Err(DappError::UserRejected)));
        assert_eq!(surface.notification(), Notification::Hidden);
    }

    #[tokio::test]
    async fn test_no_accounts() {
        let transport = MockTransport::new();
        transport.respond("eth_requestAccounts", json!([]));
        let surface = RecordingSurface::default();

        let result = connect(Some(transport), &Config::default(), &surface).await;
        assert!(matches!(result, Err(DappError::Rpc(_))));
    }
}
