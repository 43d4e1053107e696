//! Navigation Component
//!
//! Header bar with the brand and the account balance.

use leptos::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🌱"</span>
                        <span class="text-xl font-bold text-white">"Crowdfund"</span>
                    </div>

                    <span class="px-4 py-2 rounded-full bg-gray-700 text-gray-200 text-sm font-medium">
                        {move || state.balance_label()}
                    </span>
                </div>
            </div>
        </nav>
    }
}
