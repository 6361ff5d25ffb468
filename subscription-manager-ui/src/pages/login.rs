//! Login Page
//!
//! Credential form in front of the dashboard. Any non-empty pair signs in.

use leptos::*;
use subscription_manager::Credentials;

use crate::components::BusyLabel;
use crate::state::GlobalState;

const INPUT_CLASS: &str = "w-full bg-gray-800 border border-gray-700 rounded-lg px-3 py-2 \
                           text-white placeholder-gray-500 focus:border-blue-500 focus:outline-none";

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.login(Credentials::new(email.get_untracked(), password.get_untracked()));
    };

    view! {
        <div class="min-h-screen flex items-center justify-center p-4 bg-gradient-to-br from-blue-900/20 via-gray-900 to-purple-900/20">
            <div class="w-full max-w-md bg-gray-900/90 border border-gray-800 rounded-xl p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                        "Subscription Manager"
                    </h1>
                    <p class="text-gray-400 mt-2">"Sign in to your dashboard to manage subscriptions"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <label class="block space-y-2">
                        <span class="text-sm text-gray-300">"Email"</span>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            class=INPUT_CLASS
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="block space-y-2">
                        <span class="text-sm text-gray-300">"Password"</span>
                        <input
                            type="password"
                            placeholder="Enter your password"
                            class=INPUT_CLASS
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>

                    <button
                        type="submit"
                        disabled=move || state.signing_in.get()
                        class="w-full bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 \
                               hover:to-purple-700 disabled:opacity-60 disabled:cursor-not-allowed \
                               rounded-lg py-3 font-semibold flex items-center justify-center space-x-2"
                    >
                        <BusyLabel busy=state.signing_in idle="Sign In" pending="Signing in..." />
                    </button>
                </form>

                <p class="mt-4 text-center text-sm text-gray-500">
                    "Demo: Use any email and password to login"
                </p>
            </div>
        </div>
    }
}
