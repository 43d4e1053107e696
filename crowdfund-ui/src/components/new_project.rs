//! New Project Component
//!
//! Form for adding a project to the ledger.

use crowdfund::{Action, NewProject};
use leptos::*;

use crate::components::InlineLoading;
use crate::state::global::{DappHandle, GlobalState};

/// Project creation form
#[component]
pub fn NewProjectForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let handle = use_context::<DappHandle>().expect("DappHandle not found");

    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (goal, set_goal) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        handle.dispatch(Action::CreateProject(NewProject {
            name: name.get(),
            description: description.get(),
            goal: goal.get(),
        }));

        set_name.set(String::new());
        set_description.set(String::new());
        set_goal.set(String::new());
    };

    view! {
        <form on:submit=on_submit class="bg-gray-800 rounded-lg p-6 mb-8 space-y-4">
            <h2 class="text-lg font-semibold">"New project"</h2>

            <input
                type="text"
                placeholder="Name"
                required=true
                prop:value=name
                on:input=move |ev| set_name.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-2 focus:outline-none focus:ring-2 focus:ring-yellow-500"
            />

            <textarea
                placeholder="Description"
                rows="3"
                prop:value=description
                on:input=move |ev| set_description.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-2 focus:outline-none focus:ring-2 focus:ring-yellow-500"
            />

            <input
                type="text"
                inputmode="decimal"
                placeholder="Goal (cUSD)"
                required=true
                prop:value=goal
                on:input=move |ev| set_goal.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-2 focus:outline-none focus:ring-2 focus:ring-yellow-500"
            />

            <button
                type="submit"
                disabled=move || state.busy.get()
                class="w-full bg-yellow-500 hover:bg-yellow-400 disabled:bg-gray-600
                       disabled:cursor-not-allowed text-gray-900 rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if state.busy.get() {
                    view! { <InlineLoading /> }.into_view()
                } else {
                    view! { <span>"Add project"</span> }.into_view()
                }}
            </button>
        </form>
    }
}
