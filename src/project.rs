//! Project records as stored by the crowdfunding ledger

use alloy_primitives::{Address, U256};
use serde::Serialize;

use crate::units;

/// Fixed-shape tuple returned by `readProject(i)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub creator: Address,
    pub name: String,
    pub description: String,
    pub supporters: u64,
    /// Funding goal in smallest units
    pub goal: U256,
    /// Amount raised so far in smallest units
    pub invested: U256,
}

/// A project at a known position in the ledger's list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Position in the ledger's list, used as the handle for support calls
    pub index: u64,
    pub creator: Address,
    pub name: String,
    pub description: String,
    pub supporters: u64,
    pub goal: U256,
    pub invested: U256,
}

impl Project {
    /// Attach a ledger index to a fetched record
    pub fn new(index: u64, record: ProjectRecord) -> Self {
        Self {
            index,
            creator: record.creator,
            name: record.name,
            description: record.description,
            supporters: record.supporters,
            goal: record.goal,
            invested: record.invested,
        }
    }

    /// Funding progress in percent, `invested / goal * 100`.
    ///
    /// Not clamped: an over-funded project reports more than 100.
    /// Returns `None` when the goal is zero.
    pub fn progress(&self) -> Option<f64> {
        if self.goal.is_zero() {
            return None;
        }
        Some(units::to_f64(self.invested) / units::to_f64(self.goal) * 100.0)
    }
}
