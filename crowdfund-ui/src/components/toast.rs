//! Toast Notification Component
//!
//! Renders the single notification slot.

use leptos::*;

use crate::state::global::GlobalState;

/// Notification banner, hidden while the slot is empty
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-20 left-1/2 -translate-x-1/2 z-50">
            {move || {
                state.notification.with(|n| n.text().map(str::to_string)).map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-yellow-500 text-gray-900 px-4 py-3
                                rounded-lg shadow-lg transition-all duration-300 ease-out">
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
