//! Customer Card Component
//!
//! One row of the customer list: identity, badges, billing dates and the
//! payment actions available for the record's payment mode.

use leptos::*;
use subscription_manager::{CustomerRecord, PaymentAction};

use crate::state::GlobalState;

#[component]
pub fn CustomerCard(customer: CustomerRecord) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = customer.id;

    let actions = PaymentAction::available_for(&customer)
        .into_iter()
        .map(|action| {
            view! {
                <button
                    type="button"
                    on:click=move |_| state.payment_action(id, action)
                    class="px-3 py-1.5 rounded-lg text-sm bg-gray-800 border border-gray-700 \
                           text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="bg-gray-900 border border-gray-800 rounded-lg p-4 space-y-4">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-2">
                <div>
                    <h3 class="font-semibold">{customer.name.clone()}</h3>
                    <p class="text-sm text-gray-400">{customer.email.clone()}</p>
                </div>
                <div class="flex items-center gap-2">
                    <span class=format!("px-2 py-0.5 rounded-full border text-xs {}", customer.plan.badge_class())>
                        {customer.plan.as_str()}
                    </span>
                    <span class=format!("px-2 py-0.5 rounded-full text-xs {}", customer.status.badge_class())>
                        {customer.status.label()}
                    </span>
                </div>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-sm">
                <Detail label="Subscription Date" value=customer.subscription_date.format("%Y-%m-%d").to_string() />
                <Detail label="Subscribed for" value=format!("{} days", customer.subscription_days) />
                <Detail label="Next Payment" value=customer.next_payment_label() />
                <Detail label="Payment Status" value=customer.payment_mode.label().to_string() />
            </div>

            <div class="flex flex-wrap gap-2">{actions}</div>
        </div>
    }
}

#[component]
fn Detail(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <p class="text-gray-500">{label}</p>
            <p class="text-gray-200">{value}</p>
        </div>
    }
}
