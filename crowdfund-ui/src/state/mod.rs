//! State Management
//!
//! Reactive view state and the handle to the running dApp.

pub mod global;

pub use global::{provide_global_state, DappHandle, GlobalState};
