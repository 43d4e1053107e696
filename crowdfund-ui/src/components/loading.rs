//! Loading Component
//!
//! Spinners and skeleton states.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader for project cards
#[component]
pub fn CardSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 rounded-lg p-4">
                    <div class="h-40 bg-gray-700 rounded mb-4" />
                    <div class="h-4 bg-gray-700 rounded w-1/3 mb-2" />
                    <div class="h-4 bg-gray-700 rounded w-2/3" />
                </div>
            }).collect_view()}
        </div>
    }
}
