//! App Root Component
//!
//! Main application component with global providers.

use crowdfund::Action;
use leptos::*;

use crate::components::{CardSkeleton, Nav, NewProjectForm, ProjectCardView, Toast};
use crate::state::global::{provide_global_state, DappHandle, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();
    let handle = DappHandle::provide();

    // Connect the wallet and load balance + projects
    handle.start(state);

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <NewProjectForm />
                <ProjectList />
            </main>

            <Footer />

            <Toast />
        </div>
    }
}

/// Every project, rebuilt from scratch on each refresh
#[component]
fn ProjectList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            let cards = state.cards.get();
            if state.last_refresh.get().is_none() && state.busy.get() {
                view! { <CardSkeleton /> }.into_view()
            } else if cards.is_empty() {
                view! {
                    <div class="text-center text-gray-400 py-12">"No projects yet."</div>
                }.into_view()
            } else {
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {cards.into_iter().map(|card| view! { <ProjectCardView card=card /> }).collect_view()}
                    </div>
                }.into_view()
            }
        }}
    }
}

/// Footer with refresh status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let handle = use_context::<DappHandle>().expect("DappHandle not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || state.refresh_label()}
                </div>

                {move || {
                    if state.busy.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-yellow-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Working..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <button
                                on:click=move |_| handle.dispatch(Action::Refresh)
                                class="px-3 py-1 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                            >
                                "Refresh"
                            </button>
                        }.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
