//! Analytics Page
//!
//! Subscriber growth, revenue against churn, the plan split, and key metric
//! cards.

use leptos::*;
use subscription_manager::presenters::{
    key_metrics, monthly_snapshots, plan_distribution, share_fractions, share_labels,
    MonthlySnapshot,
};

use crate::components::{KeyMetricCard, PieChart, Series, SeriesChart, SeriesKind, Slice};

fn month_labels(months: &[MonthlySnapshot]) -> Vec<&'static str> {
    months.iter().map(|m| m.month).collect()
}

fn growth_series(months: &[MonthlySnapshot]) -> Vec<Series> {
    vec![Series {
        name: "Subscribers",
        color: "#3B82F6",
        kind: SeriesKind::Line,
        secondary: false,
        values: months.iter().map(|m| m.subscribers as f64).collect(),
    }]
}

fn revenue_churn_series(months: &[MonthlySnapshot]) -> Vec<Series> {
    vec![
        Series {
            name: "Revenue ($)",
            color: "#10B981",
            kind: SeriesKind::Bar,
            secondary: false,
            values: months.iter().map(|m| m.revenue as f64).collect(),
        },
        Series {
            name: "Churn",
            color: "#EF4444",
            kind: SeriesKind::Line,
            secondary: true,
            values: months.iter().map(|m| m.churn as f64).collect(),
        },
    ]
}

fn plan_slices() -> Vec<Slice> {
    let shares = plan_distribution();
    let fractions = share_fractions(&shares);
    let labels = share_labels(&shares);

    shares
        .iter()
        .zip(fractions)
        .zip(labels)
        .map(|((share, fraction), label)| Slice {
            label,
            color: share.color,
            fraction,
        })
        .collect()
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let months = monthly_snapshots();
    let growth_labels = month_labels(&months);
    let growth = growth_series(&months);
    let revenue_churn_labels = month_labels(&months);
    let revenue_churn = revenue_churn_series(&months);

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Analytics & Insights"</h1>
                <p class="text-gray-400 mt-1">"Track performance and gain insights into your subscription business"</p>
            </div>

            <div class="grid lg:grid-cols-2 gap-8">
                <ChartPanel title="Subscriber Growth">
                    <SeriesChart labels=growth_labels series=growth />
                </ChartPanel>
                <ChartPanel title="Plan Distribution">
                    <PieChart slices=plan_slices() />
                </ChartPanel>
            </div>

            <ChartPanel title="Revenue vs Churn Analysis">
                <SeriesChart labels=revenue_churn_labels series=revenue_churn />
            </ChartPanel>

            <section class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                {key_metrics().into_iter().map(|metric| view! { <KeyMetricCard metric=metric /> }).collect_view()}
            </section>
        </div>
    }
}

#[component]
fn ChartPanel(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="bg-gray-900 border border-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>
            {children()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_follow_monthly_snapshots() {
        let months = monthly_snapshots();
        let growth = growth_series(&months);
        assert_eq!(growth[0].values.len(), months.len());
        assert_eq!(growth[0].values[0], months[0].subscribers as f64);

        let revenue_churn = revenue_churn_series(&months);
        assert!(!revenue_churn[0].secondary);
        assert!(revenue_churn[1].secondary);
        assert_eq!(month_labels(&months)[0], "Jan");
    }

    #[test]
    fn test_plan_slices_sum_to_one() {
        let slices = plan_slices();
        assert_eq!(slices.len(), 3);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(slices[0].label, "Basic 44%");
    }
}
