//! In-memory doubles shared by the unit tests

use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use crate::error::{DappError, DappResult};
use crate::ledger::Ledger;
use crate::project::ProjectRecord;
use crate::render::ProjectCard;
use crate::rpc::Transport;
use crate::surface::{Notification, Surface};
use crate::wallet::WalletProvider;

pub fn sample_project(name: &str) -> ProjectRecord {
    ProjectRecord {
        creator: Address::repeat_byte(0x33),
        name: name.to_string(),
        description: format!("{} description", name),
        supporters: 0,
        goal: U256::from(10u64) * U256::from(1_000_000_000_000_000_000u64),
        invested: U256::ZERO,
    }
}

/// Ledger double with scripted failures and a call log
pub struct MockLedger {
    account: Address,
    crowdfunding: Address,
    balance: Cell<U256>,
    projects: RefCell<Vec<ProjectRecord>>,
    failing: RefCell<HashSet<String>>,
    failing_reads: RefCell<HashSet<u64>>,
    log: RefCell<Vec<String>>,
    added: RefCell<Vec<(String, String, U256)>>,
    approvals: RefCell<Vec<(Address, U256)>>,
    supports: RefCell<Vec<(u64, U256)>>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            account: Address::repeat_byte(0xaa),
            crowdfunding: Address::repeat_byte(0xcf),
            balance: Cell::new(U256::ZERO),
            projects: RefCell::new(Vec::new()),
            failing: RefCell::new(HashSet::new()),
            failing_reads: RefCell::new(HashSet::new()),
            log: RefCell::new(Vec::new()),
            added: RefCell::new(Vec::new()),
            approvals: RefCell::new(Vec::new()),
            supports: RefCell::new(Vec::new()),
        }
    }

    pub fn set_balance(&self, balance: U256) {
        self.balance.set(balance);
    }

    pub fn set_projects(&self, projects: Vec<ProjectRecord>) {
        *self.projects.borrow_mut() = projects;
    }

    /// Make every call to `op` revert
    pub fn fail(&self, op: &str) {
        self.failing.borrow_mut().insert(op.to_string());
    }

    /// Make `readProject(index)` fail with a node error
    pub fn fail_read(&self, index: u64) {
        self.failing_reads.borrow_mut().insert(index);
    }

    pub fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    pub fn added(&self) -> Vec<(String, String, U256)> {
        self.added.borrow().clone()
    }

    pub fn approvals(&self) -> Vec<(Address, U256)> {
        self.approvals.borrow().clone()
    }

    pub fn supports(&self) -> Vec<(u64, U256)> {
        self.supports.borrow().clone()
    }

    fn record(&self, entry: String) {
        self.log.borrow_mut().push(entry);
    }

    fn check(&self, op: &str) -> DappResult<()> {
        if self.failing.borrow().contains(op) {
            return Err(DappError::ContractRevert(format!("{} reverted", op)));
        }
        Ok(())
    }

    fn tx_hash(&self) -> B256 {
        B256::with_last_byte(self.log.borrow().len() as u8)
    }
}

#[async_trait(?Send)]
impl Ledger for MockLedger {
    fn account(&self) -> Address {
        self.account
    }

    fn crowdfunding_address(&self) -> Address {
        self.crowdfunding
    }

    async fn total_projects(&self) -> DappResult<u64> {
        self.record("total_projects".to_string());
        self.check("total_projects")?;
        Ok(self.projects.borrow().len() as u64)
    }

    async fn read_project(&self, index: u64) -> DappResult<ProjectRecord> {
        self.record(format!("read_project:start:{}", index));
        tokio::task::yield_now().await;
        self.record(format!("read_project:done:{}", index));

        if self.failing_reads.borrow().contains(&index) {
            return Err(DappError::Rpc(format!("read {} failed", index)));
        }
        self.projects
            .borrow()
            .get(index as usize)
            .cloned()
            .ok_or_else(|| DappError::ContractRevert("index out of range".to_string()))
    }

    async fn token_balance(&self, _owner: Address) -> DappResult<U256> {
        self.record("token_balance".to_string());
        self.check("token_balance")?;
        Ok(self.balance.get())
    }

    async fn add_project(&self, name: &str, description: &str, goal: U256) -> DappResult<B256> {
        self.record("add_project".to_string());
        self.check("add_project")?;
        self.added
            .borrow_mut()
            .push((name.to_string(), description.to_string(), goal));
        self.projects.borrow_mut().push(ProjectRecord {
            creator: self.account,
            name: name.to_string(),
            description: description.to_string(),
            supporters: 0,
            goal,
            invested: U256::ZERO,
        });
        Ok(self.tx_hash())
    }

    async fn approve(&self, spender: Address, amount: U256) -> DappResult<B256> {
        self.record("approve:start".to_string());
        tokio::task::yield_now().await;
        self.record("approve:done".to_string());
        self.check("approve")?;
        self.approvals.borrow_mut().push((spender, amount));
        Ok(self.tx_hash())
    }

    async fn support_project(&self, index: u64, amount: U256) -> DappResult<B256> {
        self.record("support_project:start".to_string());
        self.check("support_project")?;
        let mut projects = self.projects.borrow_mut();
        let project = projects
            .get_mut(index as usize)
            .ok_or_else(|| DappError::ContractRevert("index out of range".to_string()))?;
        project.supporters += 1;
        project.invested += amount;
        drop(projects);

        self.supports.borrow_mut().push((index, amount));
        self.balance.set(self.balance.get().saturating_sub(amount));
        Ok(self.tx_hash())
    }
}

/// Transport double answering from per-method queues
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<HashMap<String, VecDeque<DappResult<Value>>>>,
    calls: RefCell<Vec<(String, Value)>>,
    pauses: Cell<u32>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful result for the next call of `method`
    pub fn respond(&self, method: &str, result: Value) {
        self.push(method, Ok(result));
    }

    /// Queue a failure for the next call of `method`
    pub fn fail(&self, method: &str, err: DappError) {
        self.push(method, Err(err));
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    pub fn pauses(&self) -> u32 {
        self.pauses.get()
    }

    fn push(&self, method: &str, result: DappResult<Value>) {
        self.responses
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .push_back(result);
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn request(&self, method: &str, params: Value) -> DappResult<Value> {
        self.calls.borrow_mut().push((method.to_string(), params));
        self.responses
            .borrow_mut()
            .get_mut(method)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| Err(DappError::Rpc(format!("unexpected call to {}", method))))
    }

    async fn pause(&self, _duration: Duration) {
        self.pauses.set(self.pauses.get() + 1);
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockTransport {}

#[derive(Default)]
struct SurfaceState {
    notification: Notification,
    history: Vec<String>,
    balance: Option<String>,
    cards: Option<Vec<ProjectCard>>,
}

/// Surface that remembers everything it was asked to show
#[derive(Clone, Default)]
pub struct RecordingSurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl RecordingSurface {
    pub fn notification(&self) -> Notification {
        self.state.borrow().notification.clone()
    }

    /// Every notification text, oldest first
    pub fn history(&self) -> Vec<String> {
        self.state.borrow().history.clone()
    }

    pub fn balance(&self) -> Option<String> {
        self.state.borrow().balance.clone()
    }

    pub fn cards(&self) -> Option<Vec<ProjectCard>> {
        self.state.borrow().cards.clone()
    }
}

impl Surface for RecordingSurface {
    fn notify(&self, text: &str) {
        let mut state = self.state.borrow_mut();
        state.notification.notify(text);
        state.history.push(text.to_string());
    }

    fn clear(&self) {
        self.state.borrow_mut().notification.clear();
    }

    fn show_balance(&self, balance: &str) {
        self.state.borrow_mut().balance = Some(balance.to_string());
    }

    fn show_projects(&self, cards: Vec<ProjectCard>) {
        self.state.borrow_mut().cards = Some(cards);
    }
}
