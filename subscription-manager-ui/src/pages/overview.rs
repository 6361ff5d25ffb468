//! Overview Page
//!
//! Headline stats and the recent activity feed.

use leptos::*;
use subscription_manager::presenters::{overview_stats, recent_activity};

use crate::components::StatCard;

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard Overview"</h1>
                <p class="text-gray-400 mt-1">"Monitor your subscription metrics and recent activity"</p>
            </div>

            <section class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                {overview_stats().into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
            </section>

            <RecentActivity />
        </div>
    }
}

#[component]
fn RecentActivity() -> impl IntoView {
    view! {
        <section class="bg-gray-900 border border-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent Activity"</h2>

            <div class="space-y-2">
                {recent_activity().into_iter().map(|entry| view! {
                    <div class="flex items-center justify-between py-2 border-b border-gray-800 last:border-0">
                        <div>
                            <p class="text-sm font-medium">{entry.user_email}</p>
                            <p class="text-sm text-gray-400">{entry.action}</p>
                        </div>
                        <div class="text-right">
                            <span class=format!("px-2 py-0.5 rounded-full border text-xs {}", entry.plan.badge_class())>
                                {entry.plan.as_str()}
                            </span>
                            <p class="text-xs text-gray-500 mt-1">{entry.when}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
