//! Ledger seam
//!
//! Everything the dApp consumes from the chain, bound to one account. The
//! JSON-RPC implementation lives in [`crate::rpc::RpcLedger`]; tests use an
//! in-memory double.

use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;

use crate::error::DappResult;
use crate::project::ProjectRecord;

/// Contract client for the crowdfunding and token ledgers.
///
/// Write methods are signed by the account the client was bound to and
/// resolve once the transaction is mined.
#[async_trait(?Send)]
pub trait Ledger {
    /// Account that signs write calls
    fn account(&self) -> Address;

    /// Address of the crowdfunding contract, the spender for approvals
    fn crowdfunding_address(&self) -> Address;

    /// Number of projects in the crowdfunding ledger
    async fn total_projects(&self) -> DappResult<u64>;

    /// Read the project at `index`
    async fn read_project(&self, index: u64) -> DappResult<ProjectRecord>;

    /// Token balance of `owner` in smallest units
    async fn token_balance(&self, owner: Address) -> DappResult<U256>;

    /// Submit `addProject(name, description, goal)`
    async fn add_project(&self, name: &str, description: &str, goal: U256) -> DappResult<B256>;

    /// Submit token `approve(spender, amount)`
    async fn approve(&self, spender: Address, amount: U256) -> DappResult<B256>;

    /// Submit `supportProject(index)` with `amount` attached as value
    async fn support_project(&self, index: u64, amount: U256) -> DappResult<B256>;
}
