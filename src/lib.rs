pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod state;

use crate::config::Config;
use crate::domain::services::reporting;
use crate::infra::factory::bootstrap_state;
use crate::state::AppState;
use chrono::Utc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn init_logging() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("./logs", "rentmate.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("info,rentmate=debug"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_target(false)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()));

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    info!("Logging initialized. Writing JSON logs to ./logs/");
    guard
}

/// Boots the console session: loads config, seeds the in-memory
/// portfolio and logs the dashboard snapshot both surfaces open on.
pub async fn run() -> AppState {
    let _guard = init_logging();

    let config = Config::from_env();
    let state = bootstrap_state(&config).await;

    log_snapshot(&state).await;
    state
}

pub async fn log_snapshot(state: &AppState) {
    let properties = state.property_repo.list().await.unwrap_or_default();
    let payments = state.payment_repo.list().await.unwrap_or_default();

    let portfolio = reporting::portfolio_stats(&properties);
    let money = reporting::payment_stats(&payments, Utc::now().date_naive());

    info!(
        total_properties = portfolio.total_properties,
        total_units = portfolio.total_units,
        occupancy_rate = portfolio.occupancy_rate,
        monthly_income = portfolio.monthly_income,
        "Portfolio snapshot"
    );
    info!(
        total_collected = money.total_collected,
        pending = money.pending_total,
        overdue = money.overdue_total,
        overdue_tenants = money.overdue_tenants,
        "Payment snapshot"
    );
}
