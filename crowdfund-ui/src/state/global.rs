//! Global Application State
//!
//! Reactive state using Leptos signals. [`GlobalState`] is the surface the
//! dApp controller writes into; components only read it.

use crowdfund::{launch, Action, Config, Dapp, Notification, ProjectCard, RpcLedger, Surface};
use leptos::*;
use std::rc::Rc;

use crate::provider::InjectedProvider;

/// The controller as it runs in the browser
pub type BrowserDapp = Dapp<RpcLedger<InjectedProvider>, GlobalState>;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Single-slot status line
    pub notification: RwSignal<Notification>,
    /// Formatted token balance of the connected account
    pub balance: RwSignal<Option<String>>,
    /// Rendered project list, replaced wholesale on every refresh
    pub cards: RwSignal<Vec<ProjectCard>>,
    /// When the project list was last rendered (ms since epoch)
    pub last_refresh: RwSignal<Option<i64>>,
    /// An action is in flight
    pub busy: RwSignal<bool>,
}

impl Surface for GlobalState {
    fn notify(&self, text: &str) {
        self.notification.update(|n| n.notify(text));
    }

    fn clear(&self) {
        self.notification.update(|n| n.clear());
    }

    fn show_balance(&self, balance: &str) {
        self.balance.set(Some(balance.to_string()));
    }

    fn show_projects(&self, cards: Vec<ProjectCard>) {
        self.cards.set(cards);
        self.last_refresh.set(Some(chrono::Utc::now().timestamp_millis()));
    }
}

impl GlobalState {
    /// Balance as shown in the header
    pub fn balance_label(&self) -> String {
        balance_label(self.balance.get())
    }

    /// Footer text for the last refresh
    pub fn refresh_label(&self) -> String {
        refresh_label(self.last_refresh.get())
    }
}

fn balance_label(balance: Option<String>) -> String {
    match balance {
        Some(b) => format!("{} cUSD", b),
        None => "-- cUSD".to_string(),
    }
}

fn refresh_label(last_refresh: Option<i64>) -> String {
    last_refresh
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|dt| format!("Last refresh: {}", dt.format("%H:%M:%S")))
        .unwrap_or_else(|| "Not loaded".to_string())
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        notification: create_rw_signal(Notification::Hidden),
        balance: create_rw_signal(None),
        cards: create_rw_signal(Vec::new()),
        last_refresh: create_rw_signal(None),
        busy: create_rw_signal(false),
    };

    provide_context(state);
    state
}

/// Shared access to the controller once the wallet is connected
#[derive(Clone, Copy)]
pub struct DappHandle(StoredValue<Option<Rc<BrowserDapp>>>);

impl DappHandle {
    /// Provide an empty handle to the component tree
    pub fn provide() -> Self {
        let handle = Self(store_value(None));
        provide_context(handle);
        handle
    }

    /// Connect the injected wallet and run the initial load
    pub fn start(self, state: GlobalState) {
        state.busy.set(true);
        spawn_local(async move {
            let config = Config::default();
            let launched = launch(InjectedProvider::detect(), &config, state).await;
            state.busy.set(false);
            match launched {
                Ok(dapp) => {
                    tracing::info!(account = %dapp.account(), "dApp ready");
                    self.0.set_value(Some(Rc::new(dapp)));
                }
                Err(e) => tracing::warn!(error = %e, "dApp did not start"),
            }
        });
    }

    /// Run a user action in the background
    pub fn dispatch(self, action: Action) {
        let Some(dapp) = self.0.get_value() else {
            tracing::warn!(?action, "no wallet session");
            return;
        };

        spawn_local(async move {
            let busy = dapp.surface().busy;
            busy.set(true);
            if let Err(e) = dapp.dispatch(action).await {
                tracing::warn!(error = %e, "action failed");
            }
            busy.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_label() {
        assert_eq!(balance_label(Some("12.50".to_string())), "12.50 cUSD");
        assert_eq!(balance_label(None), "-- cUSD");
    }

    #[test]
    fn test_refresh_label() {
        assert_eq!(refresh_label(None), "Not loaded");
        assert_eq!(refresh_label(Some(0)), "Last refresh: 00:00:00");
    }
}
