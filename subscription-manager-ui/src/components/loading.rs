//! Loading Component
//!
//! Spinners shown while a simulated request is pending.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Button label that swaps to a spinner while `busy`
#[component]
pub fn BusyLabel(
    #[prop(into)]
    busy: Signal<bool>,
    idle: &'static str,
    pending: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            if busy.get() {
                view! {
                    <InlineLoading />
                    <span>{pending}</span>
                }.into_view()
            } else {
                view! { <span>{idle}</span> }.into_view()
            }
        }}
    }
}
