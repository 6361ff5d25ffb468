//! Navigation Components
//!
//! Desktop sidebar and mobile bottom bar. Both list `View::ALL` in order and
//! end with a sign-out control.

use leptos::*;
use subscription_manager::View;

use crate::state::GlobalState;

/// Fixed left sidebar shown from the `md` breakpoint up
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <aside class="hidden md:flex fixed left-0 top-0 h-full w-64 bg-gray-900 border-r border-gray-800 flex-col">
            <div class="p-6 border-b border-gray-800">
                <h1 class="text-xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                    "Subscription Manager"
                </h1>
            </div>

            <nav class="flex-1 p-4 space-y-2">
                {View::ALL.into_iter().map(|view| view! { <SidebarLink view=view /> }).collect_view()}
            </nav>

            <div class="p-4 border-t border-gray-800">
                <UserBadge />
                <button
                    on:click=move |_| state.logout()
                    class="w-full flex items-center px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-800 transition-colors"
                >
                    <span class="mr-3">"⎋"</span>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(view: View) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_active = create_memo(move |_| state.app.with(|app| app.active_view() == view));

    view! {
        <button
            on:click=move |_| state.select_view(view)
            class=move || {
                let base = "w-full flex items-center px-4 py-2 rounded-lg transition-colors";
                if is_active.get() {
                    format!("{} bg-blue-600/20 text-blue-400 border border-blue-600/30", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-800", base)
                }
            }
        >
            <span class="mr-3">{view.icon()}</span>
            {view.label()}
        </button>
    }
}

/// Avatar, name and email of the signed-in user
#[component]
fn UserBadge() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let user = create_memo(move |_| state.app.with(|app| app.user().cloned()));

    view! {
        {move || user.get().map(|user| view! {
            <div class="flex items-center space-x-3 mb-4">
                <div class="w-10 h-10 rounded-full bg-blue-600 flex items-center justify-center font-semibold">
                    {user.avatar_initial().to_string()}
                </div>
                <div class="min-w-0">
                    <p class="text-sm font-medium truncate">{user.name}</p>
                    <p class="text-xs text-gray-400 truncate">{user.email}</p>
                </div>
            </div>
        })}
    }
}

/// Bottom navigation bar for narrow screens
#[component]
pub fn MobileNav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="md:hidden fixed bottom-0 left-0 right-0 bg-gray-900 border-t border-gray-800 z-40">
            <div class="flex justify-around items-center py-2">
                {View::ALL.into_iter().map(|view| {
                    let is_active = create_memo(move |_| state.app.with(|app| app.active_view() == view));
                    view! {
                        <button
                            on:click=move |_| state.select_view(view)
                            class=move || {
                                let base = "flex flex-col items-center space-y-1 py-2 px-3";
                                if is_active.get() {
                                    format!("{} text-blue-400", base)
                                } else {
                                    format!("{} text-gray-400 hover:text-white", base)
                                }
                            }
                        >
                            <span class="text-lg">{view.icon()}</span>
                            <span class="text-xs">{view.label()}</span>
                        </button>
                    }
                }).collect_view()}

                <button
                    on:click=move |_| state.logout()
                    class="flex flex-col items-center space-y-1 py-2 px-3 text-gray-400 hover:text-white"
                >
                    <span class="text-lg">"⎋"</span>
                    <span class="text-xs">"Logout"</span>
                </button>
            </div>
        </nav>
    }
}
