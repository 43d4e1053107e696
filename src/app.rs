//! dApp controller
//!
//! Owns the session, the project list and the surface, and runs the
//! user-initiated flows. Every flow reports its outcome on the surface and
//! returns it to the caller; a failure never leaves the controller unusable.

use alloy_primitives::Address;
use std::cell::RefCell;

use crate::config::Config;
use crate::error::{DappError, DappResult};
use crate::ledger::Ledger;
use crate::project::Project;
use crate::reader;
use crate::render::Renderer;
use crate::rpc::RpcLedger;
use crate::surface::Surface;
use crate::units;
use crate::wallet::{self, Session, WalletProvider};

/// Input of the project creation form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    /// Goal in whole tokens, as typed
    pub goal: String,
}

/// User actions a front-end can dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateProject(NewProject),
    SupportProject { index: u64, amount: String },
    Refresh,
}

/// The running application
pub struct Dapp<L, S> {
    session: Session<L>,
    surface: S,
    renderer: Renderer,
    projects: RefCell<Vec<Project>>,
}

/// Connect the wallet and perform the initial load.
///
/// Without a connected session nothing is read. Read failures after a
/// successful connect are reported but the controller is still returned.
pub async fn launch<P, S>(provider: Option<P>, config: &Config, surface: S) -> DappResult<Dapp<RpcLedger<P>, S>>
where
    P: WalletProvider,
    S: Surface,
{
    surface.notify("⌛ Loading...");

    let session = match wallet::connect(provider, config, &surface).await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "wallet connection failed");
            surface.notify(&failure_text(&e));
            return Err(e);
        }
    };

    let dapp = Dapp::new(session, surface, Renderer::new(config.network.explorer_url.clone()));
    if dapp.refresh().await.is_ok() {
        dapp.surface.clear();
    }
    Ok(dapp)
}

fn failure_text(err: &DappError) -> String {
    format!("⚠️ {}.", err)
}

impl<L: Ledger, S: Surface> Dapp<L, S> {
    pub fn new(session: Session<L>, surface: S, renderer: Renderer) -> Self {
        Self {
            session,
            surface,
            renderer,
            projects: RefCell::new(Vec::new()),
        }
    }

    pub fn account(&self) -> Address {
        self.session.account
    }

    pub fn ledger(&self) -> &L {
        &self.session.ledger
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Snapshot of the last fetched project list
    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    /// Run one user action
    pub async fn dispatch(&self, action: Action) -> DappResult<()> {
        match action {
            Action::CreateProject(form) => self.create_project(form).await,
            Action::SupportProject { index, amount } => self.support_project(index, &amount).await,
            Action::Refresh => self.refresh().await,
        }
    }

    /// Re-read balance and projects. A failing read does not skip the other.
    pub async fn refresh(&self) -> DappResult<()> {
        let balance = self.refresh_balance().await;
        let projects = self.refresh_projects().await;
        balance.and(projects)
    }

    /// Read the account balance into the balance slot
    pub async fn refresh_balance(&self) -> DappResult<()> {
        self.load_balance().await.map_err(|e| self.report(e))
    }

    /// Fetch the full project list and redraw it
    pub async fn refresh_projects(&self) -> DappResult<()> {
        self.load_projects().await.map_err(|e| self.report(e))
    }

    async fn load_balance(&self) -> DappResult<()> {
        let balance = reader::read_balance(&self.session.ledger, self.session.account).await?;
        self.surface.show_balance(&balance);
        Ok(())
    }

    async fn load_projects(&self) -> DappResult<()> {
        let projects = reader::read_all_projects(&self.session.ledger).await?;
        tracing::info!(count = projects.len(), "projects loaded");
        let cards = self.renderer.render(&projects);
        *self.projects.borrow_mut() = projects;
        self.surface.show_projects(cards);
        Ok(())
    }

    /// Reads after a mined write. The write stands, so failures here are
    /// only logged and the success notification stays up.
    async fn reload_after_write(&self, balance: bool) {
        if let Err(e) = self.load_projects().await {
            tracing::warn!(error = %e, "project reload failed");
        }
        if balance {
            if let Err(e) = self.load_balance().await {
                tracing::warn!(error = %e, "balance reload failed");
            }
        }
    }

    /// Submit a new project and redraw the list on success
    pub async fn create_project(&self, form: NewProject) -> DappResult<()> {
        let name = form.name.trim().to_string();
        if name.is_empty() {
            return Err(self.report(DappError::Validation("project name is empty".to_string())));
        }
        let goal = units::parse_positive_amount(&form.goal).map_err(|e| self.report(e))?;

        self.surface.notify(&format!("⌛ Adding \"{}\"...", name));
        self.session
            .ledger
            .add_project(&name, &form.description, goal)
            .await
            .map_err(|e| self.report(e))?;

        self.surface
            .notify(&format!("🎉 You successfully added \"{}\".", name));
        self.reload_after_write(false).await;
        Ok(())
    }

    /// Approve `amount` for the crowdfunding contract, then fund the project.
    ///
    /// The approval is not undone if the support call fails.
    pub async fn support_project(&self, index: u64, amount: &str) -> DappResult<()> {
        let name = self
            .projects
            .borrow()
            .iter()
            .find(|p| p.index == index)
            .map(|p| p.name.clone());
        let name = match name {
            Some(name) => name,
            None => {
                return Err(self.report(DappError::Validation(format!(
                    "no project at index {}",
                    index
                ))))
            }
        };
        let amount = units::parse_positive_amount(amount).map_err(|e| self.report(e))?;

        self.surface.notify("⌛ Waiting for payment approval...");
        let spender = self.session.ledger.crowdfunding_address();
        self.session
            .ledger
            .approve(spender, amount)
            .await
            .map_err(|e| self.report(e))?;

        self.surface
            .notify(&format!("⌛ Awaiting payment for \"{}\"...", name));
        self.session
            .ledger
            .support_project(index, amount)
            .await
            .map_err(|e| self.report(e))?;

        self.surface
            .notify(&format!("🎉 You successfully supported \"{}\".", name));
        self.reload_after_write(true).await;
        Ok(())
    }

    fn report(&self, err: DappError) -> DappError {
        tracing::warn!(error = %err, "action failed");
        self.surface.notify(&failure_text(&err));
        err
    }
}
