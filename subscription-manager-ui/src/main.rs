//! Subscription Manager Dashboard
//!
//! Admin dashboard for subscription businesses built with Leptos (WASM).
//!
//! # Features
//!
//! - Placeholder login with a session cached in `localStorage`
//! - Overview stats and recent activity
//! - Customer list with search, status and plan filters
//! - Analytics charts drawn on canvas
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All dashboard state lives in the `subscription_manager` core;
//! this crate only renders it and forwards user events.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
