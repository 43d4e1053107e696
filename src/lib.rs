//! # Crowdfund
//!
//! Client for an on-chain crowdfunding ledger: connects a wallet, reads the
//! project list and the account's token balance, and submits the two write
//! flows the ledger offers.
//!
//! ## Features
//!
//! - **Wallet session**: EIP-1193 providers in the browser, a node's
//!   managed accounts from the CLI
//! - **Concurrent reads**: one `readProject` per index, assembled in ledger order
//! - **Approve-then-support**: token allowance first, payable support call second
//! - **Pure rendering**: projects become display cards with blockies identicons
//!
//! ## Modules
//!
//! - [`wallet`]: wallet connection and sessions
//! - [`rpc`]: JSON-RPC transports and the ledger client
//! - [`reader`]: balance and project list queries
//! - [`app`]: the controller that runs user actions
//! - [`render`]: project cards for front-ends
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crowdfund::{launch, Action, Config, HttpTransport, NewProject, Surface, ProjectCard};
//!
//! struct Stdout;
//!
//! impl Surface for Stdout {
//!     fn notify(&self, text: &str) { println!("{}", text) }
//!     fn clear(&self) {}
//!     fn show_balance(&self, balance: &str) { println!("balance: {}", balance) }
//!     fn show_projects(&self, cards: Vec<ProjectCard>) { println!("{} projects", cards.len()) }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let transport = HttpTransport::new(&config.network.rpc_url, config.network.request_timeout())?;
//!
//!     // Connect and load balance + projects
//!     let dapp = launch(Some(transport), &config, Stdout).await?;
//!
//!     // Create a project with a 5 token goal
//!     dapp.dispatch(Action::CreateProject(NewProject {
//!         name: "Community well".into(),
//!         description: "Clean water for the village".into(),
//!         goal: "5".into(),
//!     }))
//!     .await?;
//!
//!     // Fund it
//!     dapp.dispatch(Action::SupportProject { index: 0, amount: "1.5".into() }).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod contract;
pub mod error;
pub mod identicon;
pub mod ledger;
pub mod project;
pub mod reader;
pub mod render;
pub mod rpc;
pub mod surface;
pub mod units;
pub mod wallet;

#[cfg(test)]
mod testing;

// Re-export top-level types for convenience
pub use app::{launch, Action, Dapp, NewProject};

pub use config::{Config, ConfigError, LoggingConfig, NetworkConfig, TransactionsConfig};

pub use contract::{Contracts, CROWDFUNDING_ADDRESS, TOKEN_ADDRESS};

pub use error::{DappError, DappResult};

pub use ledger::Ledger;

pub use project::{Project, ProjectRecord};

pub use render::{ProjectCard, Renderer};

pub use rpc::{ReceiptPolling, RpcLedger, Transport};

#[cfg(feature = "native")]
pub use rpc::HttpTransport;

pub use surface::{Notification, Surface};

pub use wallet::{connect, Session, WalletProvider};
