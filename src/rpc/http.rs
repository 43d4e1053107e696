//! HTTP JSON-RPC transport
//!
//! Talks to a node directly. Used by the CLI, where the node manages the
//! signing accounts (`eth_accounts`).

use alloy_primitives::Address;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::transport::{rpc_call, JsonRpcRequest, JsonRpcResponse, Transport};
use crate::error::{DappError, DappResult};
use crate::wallet::WalletProvider;

/// JSON-RPC over HTTP POST
pub struct HttpTransport {
    client: Client,
    url: String,
    next_id: AtomicU64,
}

impl HttpTransport {
    /// Create a transport for the node at `url`
    pub fn new(url: impl Into<String>, timeout: Duration) -> DappResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DappError::from)?;

        Ok(Self {
            client,
            url: url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn request(&self, method: &str, params: Value) -> DappResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = JsonRpcRequest::new(id, method, params);

        let response = self.client.post(&self.url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DappError::Rpc(format!("HTTP {}: {}", status.as_u16(), text)));
        }

        let envelope: JsonRpcResponse = response.json().await?;
        envelope.into_result()
    }

    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[async_trait(?Send)]
impl WalletProvider for HttpTransport {
    async fn enable(&self) -> DappResult<Vec<Address>> {
        rpc_call(self, "eth_accounts", json!([])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transport() {
        let transport = HttpTransport::new("http://localhost:8545", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.url(), "http://localhost:8545");
    }

    #[tokio::test]
    async fn test_unreachable_node_is_rpc_error() {
        let transport = HttpTransport::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let result = transport.request("eth_blockNumber", json!([])).await;
        assert!(matches!(result, Err(DappError::Rpc(_))));
    }
}
