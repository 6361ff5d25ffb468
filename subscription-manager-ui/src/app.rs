//! App Root Component
//!
//! Provides global state and switches between the login gate and the
//! dashboard shell.

use leptos::*;
use subscription_manager::Screen;

use crate::components::Toast;
use crate::pages::{DashboardShell, LoginPage};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let signed_in = create_memo(move |_| state.app.with(|app| app.screen() != Screen::Login));

    view! {
        <div class="min-h-screen bg-gray-950 text-white">
            {move || {
                if signed_in.get() {
                    view! { <DashboardShell /> }.into_view()
                } else {
                    view! { <LoginPage /> }.into_view()
                }
            }}

            <Toast />
        </div>
    }
}
