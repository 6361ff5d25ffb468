//! Subscription Manager walkthrough
//!
//! Drives the dashboard core without a browser: restores or creates a
//! session, visits every view, applies a few customer filters and simulated
//! actions, then logs out. Everything is reported through `tracing`.

use anyhow::Context;
use subscription_manager::customers::{NewSubscription, PaymentAction, Plan};
use subscription_manager::presenters::{
    key_metrics, monthly_snapshots, overview_stats, plan_distribution, recent_activity,
    share_labels,
};
use subscription_manager::{
    logging, outcome_notification, AppState, Config, Credentials, FileCache, Screen, View,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, report) = Config::load_reported();
    logging::init(&config.logging).context("failed to initialise logging")?;
    report.log();

    tracing::info!("Subscription Manager v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Session cache: {}", config.session.cache_dir);

    let cache = FileCache::new(&config.session.cache_dir);
    let mut app = AppState::new(config, cache);

    if app.screen() == Screen::Login {
        demo_login(&mut app).await;
    }

    for view in View::ALL {
        app.select_view(view);
        render(&mut app);
    }

    app.logout();
    tracing::info!(screen = ?app.screen(), "Walkthrough complete");
    Ok(())
}

async fn demo_login(app: &mut AppState<FileCache>) {
    for credentials in [
        Credentials::new("demo@example.com", ""),
        Credentials::new("demo@example.com", "demo"),
    ] {
        tokio::time::sleep(app.login_latency()).await;
        let outcome = app.submit_login(&credentials);
        tracing::info!("{}", outcome_notification(&outcome));
    }
}

fn render(app: &mut AppState<FileCache>) {
    match app.screen() {
        Screen::Login => tracing::info!("Login screen"),
        Screen::Dashboard(View::Overview) => render_overview(),
        Screen::Dashboard(View::Customers) => render_customers(app),
        Screen::Dashboard(View::Analytics) => render_analytics(),
    }
}

fn render_overview() {
    for stat in overview_stats() {
        tracing::info!("{}: {} ({})", stat.title, stat.value, stat.change_label());
    }
    for entry in recent_activity() {
        tracing::info!("{} {} [{}] {}", entry.user_email, entry.action, entry.plan, entry.when);
    }
}

fn render_customers(app: &mut AppState<FileCache>) {
    for (query, status, plan) in [("", "all", "all"), ("", "active", "Premium"), ("zzz", "all", "all")] {
        app.set_query(query);
        app.set_status(status);
        app.set_plan(plan);

        let visible = app.visible_customers();
        tracing::info!(query, status, plan, "Customers ({})", visible.len());
        for customer in visible {
            tracing::info!(
                "  {} <{}> {} {} next payment {}",
                customer.name,
                customer.email,
                customer.plan,
                customer.status,
                customer.next_payment_label()
            );
        }
    }

    match app.payment_action(1, PaymentAction::SendPaymentLink) {
        Ok(n) => tracing::info!("{}", n),
        Err(e) => tracing::warn!("{}", e),
    }

    let form = NewSubscription {
        name: "Dana Lee".to_string(),
        email: "dana@example.com".to_string(),
        plan: Some(Plan::Pro),
        ..NewSubscription::default()
    };
    match app.add_subscription(&form) {
        Ok(n) => tracing::info!("{}", n),
        Err(e) => tracing::warn!("{}", e),
    }
}

fn render_analytics() {
    for metric in key_metrics() {
        tracing::info!("{}: {} {}", metric.title, metric.value, metric.trend.label());
    }
    for month in monthly_snapshots() {
        tracing::info!(
            "{}: {} subscribers, ${} revenue, {} churned",
            month.month,
            month.subscribers,
            month.revenue,
            month.churn
        );
    }
    let shares = plan_distribution();
    for (share, label) in shares.iter().zip(share_labels(&shares)) {
        tracing::info!("{} ({} subscribers)", label, share.subscribers);
    }
}
