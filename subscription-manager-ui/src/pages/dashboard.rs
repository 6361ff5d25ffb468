//! Dashboard Shell
//!
//! Navigation chrome around whichever view the router has active.

use leptos::*;
use subscription_manager::View;

use super::{AnalyticsPage, CustomersPage, OverviewPage};
use crate::components::{MobileNav, Sidebar};
use crate::state::GlobalState;

#[component]
pub fn DashboardShell() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let active = create_memo(move |_| state.app.with(|app| app.active_view()));

    view! {
        <div class="min-h-screen bg-gray-950">
            <Sidebar />

            <main class="md:ml-64 px-4 md:px-8 py-8 pb-24 md:pb-8">
                {move || match active.get() {
                    View::Overview => view! { <OverviewPage /> }.into_view(),
                    View::Customers => view! { <CustomersPage /> }.into_view(),
                    View::Analytics => view! { <AnalyticsPage /> }.into_view(),
                }}
            </main>

            <MobileNav />
        </div>
    }
}
