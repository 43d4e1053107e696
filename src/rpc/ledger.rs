//! Ledger client over JSON-RPC
//!
//! Encodes contract calls with the `sol!` bindings, reads through
//! `eth_call` and writes through `eth_sendTransaction`, then waits for the
//! receipt.

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::transport::{rpc_call, Transport};
use crate::contract::{Contracts, ICrowdfunding, IERC20};
use crate::error::{DappError, DappResult};
use crate::ledger::Ledger;
use crate::project::ProjectRecord;

/// How a client waits for a submitted transaction to be mined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptPolling {
    pub interval: Duration,
    /// Give up after this many empty polls; `None` waits indefinitely
    pub limit: Option<u32>,
}

impl Default for ReceiptPolling {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
            limit: None,
        }
    }
}

/// Contract client bound to one account
pub struct RpcLedger<T> {
    transport: T,
    account: Address,
    contracts: Contracts,
    polling: ReceiptPolling,
}

#[derive(Debug, Deserialize)]
struct Receipt {
    #[serde(default)]
    status: Option<String>,
}

impl Receipt {
    // Pre-Byzantium receipts carry no status; treat them as mined
    fn succeeded(&self) -> bool {
        !matches!(self.status.as_deref(), Some("0x0") | Some("0x00"))
    }
}

impl<T: Transport> RpcLedger<T> {
    pub fn new(transport: T, account: Address, contracts: Contracts, polling: ReceiptPolling) -> Self {
        Self {
            transport,
            account,
            contracts,
            polling,
        }
    }

    pub fn contracts(&self) -> Contracts {
        self.contracts
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<C: SolCall>(&self, to: Address, call: C) -> DappResult<C::Return> {
        let data: Bytes = rpc_call(
            &self.transport,
            "eth_call",
            json!([{ "to": to, "data": Bytes::from(call.abi_encode()) }, "latest"]),
        )
        .await?;
        C::abi_decode_returns(&data, true).map_err(DappError::from)
    }

    async fn send<C: SolCall>(&self, to: Address, call: C, value: Option<U256>) -> DappResult<B256> {
        let mut tx = json!({
            "from": self.account,
            "to": to,
            "data": Bytes::from(call.abi_encode()),
        });
        if let Some(value) = value {
            tx["value"] = json!(value);
        }

        let hash: B256 = rpc_call(&self.transport, "eth_sendTransaction", json!([tx])).await?;
        tracing::info!(%hash, method = C::SIGNATURE, "transaction submitted");

        self.wait_for_receipt(hash).await
    }

    async fn wait_for_receipt(&self, hash: B256) -> DappResult<B256> {
        let mut polls = 0u32;
        loop {
            let receipt: Option<Receipt> =
                rpc_call(&self.transport, "eth_getTransactionReceipt", json!([hash])).await?;

            if let Some(receipt) = receipt {
                if receipt.succeeded() {
                    tracing::info!(%hash, "transaction mined");
                    return Ok(hash);
                }
                return Err(DappError::ContractRevert(format!(
                    "transaction {} reverted",
                    hash
                )));
            }

            polls += 1;
            if let Some(limit) = self.polling.limit {
                if polls >= limit {
                    return Err(DappError::Rpc(format!(
                        "transaction {} not mined after {} polls",
                        hash, polls
                    )));
                }
            }
            self.transport.pause(self.polling.interval).await;
        }
    }
}

fn to_u64(value: U256, what: &str) -> DappResult<u64> {
    u64::try_from(value).map_err(|_| DappError::Decode(format!("{} {} does not fit in u64", what, value)))
}

#[async_trait(?Send)]
impl<T: Transport> Ledger for RpcLedger<T> {
    fn account(&self) -> Address {
        self.account
    }

    fn crowdfunding_address(&self) -> Address {
        self.contracts.crowdfunding
    }

    async fn total_projects(&self) -> DappResult<u64> {
        let ret = self
            .call(self.contracts.crowdfunding, ICrowdfunding::totalProjectsCall {})
            .await?;
        to_u64(ret.count, "project count")
    }

    async fn read_project(&self, index: u64) -> DappResult<ProjectRecord> {
        let ret = self
            .call(
                self.contracts.crowdfunding,
                ICrowdfunding::readProjectCall {
                    index: U256::from(index),
                },
            )
            .await?;
        Ok(ProjectRecord {
            creator: ret.creator,
            name: ret.name,
            description: ret.description,
            supporters: to_u64(ret.supporters, "supporter count")?,
            goal: ret.goal,
            invested: ret.invested,
        })
    }

    async fn token_balance(&self, owner: Address) -> DappResult<U256> {
        let ret = self
            .call(self.contracts.token, IERC20::balanceOfCall { owner })
            .await?;
        Ok(ret.balance)
    }

    async fn add_project(&self, name: &str, description: &str, goal: U256) -> DappResult<B256> {
        let call = ICrowdfunding::addProjectCall {
            name: name.to_string(),
            description: description.to_string(),
            goal,
        };
        self.send(self.contracts.crowdfunding, call, None).await
    }

    async fn approve(&self, spender: Address, amount: U256) -> DappResult<B256> {
        let call = IERC20::approveCall { spender, amount };
        self.send(self.contracts.token, call, None).await
    }

    async fn support_project(&self, index: u64, amount: U256) -> DappResult<B256> {
        let call = ICrowdfunding::supportProjectCall {
            index: U256::from(index),
        };
        self.send(self.contracts.crowdfunding, call, Some(amount)).await
    }
}
