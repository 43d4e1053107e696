//! Injected Wallet Provider
//!
//! Talks to the wallet extension's EIP-1193 object (`window.celo`, then
//! `window.ethereum`). Requests and results cross the JS boundary as JSON.

use alloy_primitives::Address;
use async_trait::async_trait;
use crowdfund::rpc::{classify_rpc_error, rpc_call};
use crowdfund::{DappError, DappResult, Transport, WalletProvider};
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Object, Promise, Reflect, JSON};
use serde_json::{json, Value};
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Globals checked for an injected provider, in order
const PROVIDER_KEYS: [&str; 2] = ["celo", "ethereum"];

/// The wallet extension's provider object
pub struct InjectedProvider {
    inner: Object,
}

impl InjectedProvider {
    /// Find the injected provider, if the extension is installed
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        PROVIDER_KEYS.iter().find_map(|key| {
            let value = Reflect::get(&window, &JsValue::from_str(key)).ok()?;
            if value.is_undefined() || value.is_null() {
                return None;
            }
            tracing::debug!("Using injected provider window.{}", key);
            Some(Self {
                inner: value.unchecked_into(),
            })
        })
    }

    fn method(&self, name: &str) -> Option<Function> {
        Reflect::get(&self.inner, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }
}

/// Await a promise returned by the provider
async fn settle(value: JsValue) -> DappResult<JsValue> {
    let promise: Promise = value
        .dyn_into()
        .map_err(|_| DappError::Rpc("wallet returned a non-promise".to_string()))?;
    JsFuture::from(promise).await.map_err(wallet_error)
}

/// Map a rejected provider request (`{ code, message }`) to a dApp error
fn wallet_error(err: JsValue) -> DappError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "wallet request failed".to_string());
    classify_rpc_error(code, message)
}

fn missing_request_error() -> DappError {
    DappError::Rpc("wallet does not support request()".to_string())
}

fn to_js(value: &Value) -> DappResult<JsValue> {
    JSON::parse(&serde_json::to_string(value)?).map_err(wallet_error)
}

fn from_js(value: &JsValue) -> DappResult<Value> {
    if value.is_undefined() {
        return Ok(Value::Null);
    }
    let text: String = JSON::stringify(value).map_err(wallet_error)?.into();
    Ok(serde_json::from_str(&text)?)
}

#[async_trait(?Send)]
impl Transport for InjectedProvider {
    async fn request(&self, method: &str, params: Value) -> DappResult<Value> {
        let request = self
            .method("request")
            .ok_or_else(missing_request_error)?;
        let args = to_js(&json!({ "method": method, "params": params }))?;

        tracing::debug!(method, "wallet request");
        let pending = request.call1(&self.inner, &args).map_err(wallet_error)?;
        let result = settle(pending).await?;
        from_js(&result)
    }

    async fn pause(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

#[async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    async fn enable(&self) -> DappResult<Vec<Address>> {
        // Older Celo extensions only expose the legacy `enable()`
        match self.method("enable") {
            Some(enable) => {
                let pending = enable.call0(&self.inner).map_err(wallet_error)?;
                let accounts = settle(pending).await?;
                Ok(serde_json::from_value(from_js(&accounts)?)?)
            }
            None => rpc_call(self, "eth_requestAccounts", json!([])).await,
        }
    }
}
