//! Project Card Component
//!
//! One rendered project with its support form.

use crowdfund::{Action, ProjectCard};
use leptos::*;

use crate::state::global::{DappHandle, GlobalState};

/// Width of the progress bar; overfunded projects fill it
fn bar_width(progress: Option<f64>) -> String {
    let percent = progress.unwrap_or(0.0).clamp(0.0, 100.0);
    format!("width: {:.2}%", percent)
}

/// Project card component
#[component]
pub fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let handle = use_context::<DappHandle>().expect("DappHandle not found");

    let index = card.index;
    let (amount, set_amount) = create_signal(String::new());

    let on_support = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        handle.dispatch(Action::SupportProject {
            index,
            amount: amount.get(),
        });
        set_amount.set(String::new());
    };

    view! {
        <div class="bg-gray-800 rounded-lg border border-gray-700 overflow-hidden flex flex-col">
            <div class="p-4 flex items-center space-x-3">
                <a href=card.explorer_link.clone() target="_blank" rel="noreferrer">
                    <img src=card.identicon.clone() alt=card.creator.clone() width="48" height="48" class="rounded-full" />
                </a>
                <div class="min-w-0">
                    <h3 class="text-lg font-semibold truncate">{card.name.clone()}</h3>
                    <span class="text-xs text-gray-400">
                        {format!("{} supporters", card.supporters)}
                    </span>
                </div>
            </div>

            <p class="px-4 text-gray-300 text-sm flex-1">{card.description.clone()}</p>

            <div class="p-4 space-y-2">
                <div class="flex justify-between text-sm">
                    <span class="text-gray-400">{format!("Goal: {} cUSD", card.goal)}</span>
                    <span class="font-medium">{format!("{}%", card.progress_label)}</span>
                </div>
                <div class="h-2 bg-gray-700 rounded-full">
                    <div class="h-2 bg-yellow-500 rounded-full" style=bar_width(card.progress) />
                </div>
            </div>

            <form on:submit=on_support class="p-4 pt-0 flex space-x-2">
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Amount (cUSD)"
                    required=true
                    prop:value=amount
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                    class="flex-1 min-w-0 bg-gray-700 rounded-lg px-3 py-2 text-sm focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || state.busy.get()
                    class="px-4 py-2 bg-yellow-500 hover:bg-yellow-400 disabled:bg-gray-600 text-gray-900
                           rounded-lg text-sm font-semibold transition-colors"
                >
                    "Support"
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(Some(42.5)), "width: 42.50%");
        assert_eq!(bar_width(Some(150.0)), "width: 100.00%");
        assert_eq!(bar_width(None), "width: 0.00%");
    }
}
