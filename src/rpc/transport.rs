//! JSON-RPC transport seam
//!
//! A transport moves one request to a node or an injected wallet and hands
//! back the raw `result`. Browser providers and the HTTP client implement it.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::error::{DappError, DappResult};

/// EIP-1193 "user rejected the request"
pub const USER_REJECTED_CODE: i64 = 4001;

/// Execution reverted, as reported by geth-style nodes
pub const EXECUTION_REVERTED_CODE: i64 = 3;

/// Something that can answer JSON-RPC requests
#[async_trait(?Send)]
pub trait Transport {
    /// Issue `method` with `params` and return the `result` value
    async fn request(&self, method: &str, params: Value) -> DappResult<Value>;

    /// Suspend the calling flow, used between receipt polls
    async fn pause(&self, duration: Duration);
}

/// Issue a request and deserialize its result
pub async fn rpc_call<T, R>(transport: &T, method: &str, params: Value) -> DappResult<R>
where
    T: Transport + ?Sized,
    R: DeserializeOwned,
{
    tracing::debug!(method, "rpc request");
    let value = transport.request(method, params).await?;
    serde_json::from_value(value).map_err(DappError::from)
}

/// Map a JSON-RPC error object onto the dApp error taxonomy
pub fn classify_rpc_error(code: Option<i64>, message: String) -> DappError {
    match code {
        Some(USER_REJECTED_CODE) => DappError::UserRejected,
        Some(EXECUTION_REVERTED_CODE) => DappError::ContractRevert(message),
        _ if message.to_lowercase().contains("revert") => DappError::ContractRevert(message),
        Some(code) => DappError::Rpc(format!("{} (code {})", message, code)),
        None => DappError::Rpc(message),
    }
}

// ============================================
// Envelope DTOs
// ============================================

/// JSON-RPC 2.0 request body
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

/// JSON-RPC 2.0 response body
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// Error member of a JSON-RPC response
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

impl JsonRpcResponse {
    /// Split the envelope into the result or a classified error
    pub fn into_result(self) -> DappResult<Value> {
        match self.error {
            Some(err) => Err(classify_rpc_error(Some(err.code), err.message)),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}
