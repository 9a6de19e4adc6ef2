use watchtower_common::dashboard;

use crate::catalog::FunctionInfo;
use crate::config::WatcherConfig;
use crate::monitoring::{ApiError, MonitoringApi};

pub async fn update_dashboard(
    api: &dyn MonitoringApi,
    cfg: &WatcherConfig,
    functions: &[FunctionInfo],
) -> Result<(), ApiError> {
    let names: Vec<String> = functions.iter().map(|f| f.name.clone()).collect();
    let body = dashboard::dashboard_body(&cfg.region, &names, cfg.errors_period_seconds);

    tracing::info!(
        dashboard = %cfg.dashboard_name,
        functions = names.len(),
        "updating dashboard"
    );

    let messages = api
        .put_dashboard(&cfg.dashboard_name, &body.to_string())
        .await?;
    for message in &messages {
        tracing::warn!(dashboard = %cfg.dashboard_name, %message, "dashboard validation message");
    }

    Ok(())
}
