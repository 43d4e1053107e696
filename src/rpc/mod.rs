//! JSON-RPC plumbing
//!
//! - **Transport**: one request in, one `result` out
//! - **RpcLedger**: the [`Ledger`](crate::ledger::Ledger) implementation on top of a transport
//! - **HttpTransport**: reqwest-based transport for native builds

#[cfg(feature = "native")]
mod http;
mod ledger;
mod transport;

#[cfg(feature = "native")]
pub use http::HttpTransport;
pub use ledger::{ReceiptPolling, RpcLedger};
pub use transport::{
    classify_rpc_error, rpc_call, JsonRpcRequest, JsonRpcResponse, RpcErrorObject, Transport,
    EXECUTION_REVERTED_CODE, USER_REJECTED_CODE,
};
