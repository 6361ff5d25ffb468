//! Add Subscription Dialog
//!
//! Modal form for a new subscriber. Submitting only shows a confirmation;
//! the customer list is unchanged.

use leptos::*;
use subscription_manager::customers::NEW_SUBSCRIPTION_MODES;
use subscription_manager::{NewSubscription, PaymentMode, Plan};

use crate::state::GlobalState;

const INPUT_CLASS: &str = "w-full bg-gray-800 border border-gray-700 rounded-lg px-3 py-2 \
                           text-white placeholder-gray-500 focus:border-blue-500 focus:outline-none";

/// "Add Subscription" button plus the dialog it opens
#[component]
pub fn AddSubscription() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (open, set_open) = create_signal(false);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (plan, set_plan) = create_signal(None::<Plan>);
    let (mode, set_mode) = create_signal(PaymentMode::Manual);

    let reset = move || {
        set_name.set(String::new());
        set_email.set(String::new());
        set_plan.set(None);
        set_mode.set(PaymentMode::Manual);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = NewSubscription {
            name: name.get_untracked(),
            email: email.get_untracked(),
            plan: plan.get_untracked(),
            payment_mode: mode.get_untracked(),
        };

        if state.add_subscription(&form) {
            reset();
            set_open.set(false);
        }
    };

    view! {
        <button
            type="button"
            on:click=move |_| set_open.set(true)
            class="px-4 py-2 rounded-lg bg-gradient-to-r from-blue-600 to-purple-600 \
                   hover:from-blue-700 hover:to-purple-700 text-white font-medium"
        >
            "+ Add Subscription"
        </button>

        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 bg-black/60 flex items-center justify-center p-4">
                <div class="w-full max-w-md bg-gray-900 border border-gray-800 rounded-xl p-6">
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-xl font-semibold">"Add New Subscription"</h2>
                        <button
                            type="button"
                            on:click=move |_| set_open.set(false)
                            class="text-gray-400 hover:text-white"
                        >
                            "×"
                        </button>
                    </div>

                    <form on:submit=on_submit class="space-y-4">
                        <label class="block space-y-2">
                            <span class="text-sm text-gray-300">"Customer Name"</span>
                            <input
                                type="text"
                                placeholder="Enter customer name"
                                class=INPUT_CLASS
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="block space-y-2">
                            <span class="text-sm text-gray-300">"Email Address"</span>
                            <input
                                type="email"
                                placeholder="Enter email address"
                                class=INPUT_CLASS
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="block space-y-2">
                            <span class="text-sm text-gray-300">"Subscription Plan"</span>
                            <select
                                class=INPUT_CLASS
                                prop:value=move || plan.get().map(|p| p.as_str()).unwrap_or("")
                                on:change=move |ev| set_plan.set(event_target_value(&ev).parse().ok())
                            >
                                <option value="">"Select a plan"</option>
                                {Plan::all().iter().map(|p| view! {
                                    <option value=p.as_str()>{p.as_str()}</option>
                                }).collect_view()}
                            </select>
                        </label>

                        <label class="block space-y-2">
                            <span class="text-sm text-gray-300">"Payment Status"</span>
                            <select
                                class=INPUT_CLASS
                                prop:value=move || mode.get().as_str()
                                on:change=move |ev| {
                                    if let Ok(m) = event_target_value(&ev).parse() {
                                        set_mode.set(m);
                                    }
                                }
                            >
                                {NEW_SUBSCRIPTION_MODES.iter().map(|m| view! {
                                    <option value=m.as_str()>{m.label()}</option>
                                }).collect_view()}
                            </select>
                        </label>

                        <button
                            type="submit"
                            class="w-full bg-gradient-to-r from-blue-600 to-purple-600 \
                                   hover:from-blue-700 hover:to-purple-700 rounded-lg py-3 font-semibold"
                        >
                            "Add Subscription"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
