//! Toast Notification Component

use leptos::*;
use subscription_manager::{Notification, Variant};

use crate::state::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 md:bottom-4 right-4 z-50 space-y-2">
            {move || {
                state.notification.with(|slot| slot.current().cloned()).map(|notification| view! {
                    <ToastMessage notification=notification on_close=move |_| state.dismiss() />
                })
            }}
        </div>
    }
}

/// Icon and background for a notification variant
fn variant_style(variant: Variant) -> (&'static str, &'static str) {
    match variant {
        Variant::Default => ("✓", "bg-gray-800 border-gray-700"),
        Variant::Destructive => ("✕", "bg-red-600 border-red-500"),
    }
}

#[component]
fn ToastMessage(
    notification: Notification,
    on_close: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    let (icon, bg_class) = variant_style(notification.variant);

    view! {
        <div class=format!(
            "flex items-start space-x-3 {} border text-white px-4 py-3 rounded-lg shadow-lg \
             max-w-sm transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <div class="flex-1">
                <p class="text-sm font-semibold">{notification.title}</p>
                <p class="text-sm opacity-90">{notification.description}</p>
            </div>
            <button
                type="button"
                on:click=on_close
                class="text-gray-300 hover:text-white text-sm"
            >
                "×"
            </button>
        </div>
    }
}
