//! Stat Card Components
//!
//! Headline figures for the overview and analytics pages.

use leptos::*;
use subscription_manager::presenters::{KeyMetric, OverviewStat, Sentiment, Trend};

/// Overview stat with month-over-month change
#[component]
pub fn StatCard(stat: OverviewStat) -> impl IntoView {
    let change_class = match stat.sentiment {
        Sentiment::Positive => "text-green-400",
        Sentiment::Negative => "text-red-400",
    };

    view! {
        <div class="bg-gray-900 border border-gray-800 rounded-lg p-4">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{stat.title}</span>
                <span class="text-xl">{stat.icon}</span>
            </div>

            <div class="text-2xl font-bold mt-2">{stat.value.to_string()}</div>

            <p class="text-xs mt-1">
                <span class=change_class>{stat.change_label()}</span>
                <span class="text-gray-500">" from last month"</span>
            </p>
        </div>
    }
}

/// Analytics key metric with trend line
#[component]
pub fn KeyMetricCard(metric: KeyMetric) -> impl IntoView {
    let trend_class = match metric.trend {
        Trend::Up => "text-green-400",
        Trend::Down => "text-red-400",
    };

    view! {
        <div class="bg-gray-900 border border-gray-800 rounded-lg p-4">
            <span class="text-gray-400 text-sm">{metric.title}</span>
            <div class=format!("text-2xl font-bold mt-2 {}", metric.accent)>
                {metric.value.to_string()}
            </div>
            <p class="text-xs text-gray-500 mt-1">{metric.description}</p>
            <p class=format!("text-xs mt-2 {}", trend_class)>{metric.trend.label()}</p>
        </div>
    }
}
