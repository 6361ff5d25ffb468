//! Customers Page
//!
//! Search box, status and plan selects, and the filtered customer list. The
//! list is recomputed from the core filter on every input event.

use leptos::*;
use subscription_manager::customers::WILDCARD;
use subscription_manager::{Plan, Status};

use crate::components::{AddSubscription, CustomerCard};
use crate::state::GlobalState;

const CONTROL_CLASS: &str = "bg-gray-800 border border-gray-700 rounded-lg px-3 py-2 text-white \
                             placeholder-gray-500 focus:border-blue-500 focus:outline-none";

#[component]
pub fn CustomersPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let visible = create_memo(move |_| {
        state.app.with(|app| {
            app.visible_customers()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="space-y-8">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold">"Customer Management"</h1>
                    <p class="text-gray-400 mt-1">"Manage subscriptions and payment settings"</p>
                </div>
                <AddSubscription />
            </div>

            <Filters />

            <section class="space-y-4">
                <h2 class="text-xl font-semibold">{move || list_heading(visible.with(|c| c.len()))}</h2>
                {move || {
                    let customers = visible.get();
                    if customers.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No customers match the current filters"</p>
                        }.into_view()
                    } else {
                        customers
                            .into_iter()
                            .map(|customer| view! { <CustomerCard customer=customer /> })
                            .collect_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Title of the customer list with the number of matches
fn list_heading(count: usize) -> String {
    format!("Customers ({})", count)
}

#[component]
fn Filters() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-gray-900 border border-gray-800 rounded-xl p-6">
            <h2 class="text-lg font-semibold mb-4">"Search & Filters"</h2>

            <div class="flex flex-col md:flex-row gap-4">
                <input
                    type="text"
                    placeholder="Search customers..."
                    class=format!("flex-1 {}", CONTROL_CLASS)
                    prop:value=move || state.app.with(|app| app.filter().query.clone())
                    on:input=move |ev| state.set_query(event_target_value(&ev))
                />

                <select
                    class=CONTROL_CLASS
                    prop:value=move || state.app.with(|app| app.filter().status.as_value())
                    on:change=move |ev| state.set_status(&event_target_value(&ev))
                >
                    <option value=WILDCARD>"All Status"</option>
                    {Status::all().iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </select>

                <select
                    class=CONTROL_CLASS
                    prop:value=move || state.app.with(|app| app.filter().plan.as_value())
                    on:change=move |ev| state.set_plan(&event_target_value(&ev))
                >
                    <option value=WILDCARD>"All Plans"</option>
                    {Plan::all().iter().map(|p| view! {
                        <option value=p.as_str()>{p.as_str()}</option>
                    }).collect_view()}
                </select>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subscription_manager::{AppState, Config, MemoryCache};

    #[test]
    fn test_heading_counts_filtered_customers() {
        let mut app = AppState::new(Config::default(), MemoryCache::new());
        assert_eq!(list_heading(app.visible_customers().len()), "Customers (5)");

        app.set_status("active");
        app.set_plan("Premium");
        assert_eq!(list_heading(app.visible_customers().len()), "Customers (2)");

        app.set_query("zzz");
        assert_eq!(list_heading(app.visible_customers().len()), "Customers (0)");
    }
}
