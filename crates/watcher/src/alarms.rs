use futures::stream::{self, StreamExt};

use watchtower_common::alarm::{errors_alarm, throttles_alarm};
use watchtower_common::naming;

use crate::catalog::FunctionInfo;
use crate::config::WatcherConfig;
use crate::monitoring::{ApiError, MonitoringApi};

#[derive(Debug)]
pub struct FanOutError {
    pub failed: usize,
    pub total: usize,
}

impl std::fmt::Display for FanOutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "alarm fan-out: {}/{} submissions failed",
            self.failed, self.total
        )
    }
}

impl std::error::Error for FanOutError {}

pub async fn create_function_alarms(
    api: &dyn MonitoringApi,
    cfg: &WatcherConfig,
    function_name: &str,
) -> Result<(), ApiError> {
    let errors = errors_alarm(
        function_name,
        cfg.errors_threshold,
        cfg.errors_period_seconds,
        &cfg.alarms_topic_arn,
    );
    tracing::info!(alarm = %errors.name, "creating alarm");
    api.put_alarm(&errors).await?;

    let throttles = throttles_alarm(
        function_name,
        cfg.throttles_threshold_pc,
        cfg.errors_period_seconds,
        &cfg.alarms_topic_arn,
    );
    tracing::info!(alarm = %throttles.name, "creating alarm");
    api.put_alarm(&throttles).await?;

    Ok(())
}

pub async fn update_alarms(
    api: &dyn MonitoringApi,
    cfg: &WatcherConfig,
    functions: &[FunctionInfo],
) -> Result<usize, FanOutError> {
    tracing::info!(functions = functions.len(), "creating alarms");

    let results: Vec<(String, Result<(), ApiError>)> = stream::iter(functions)
        .map(|f| async move {
            let outcome = create_function_alarms(api, cfg, &f.name).await;
            (f.name.clone(), outcome)
        })
        .buffer_unordered(cfg.max_concurrency.max(1))
        .collect()
        .await;

    let mut failed = 0;
    for (name, outcome) in &results {
        match outcome {
            Ok(()) => tracing::info!(function = %name, "alarms created"),
            Err(e) => {
                failed += 1;
                tracing::error!(function = %name, error = %e, "alarm creation failed");
            }
        }
    }

    if failed > 0 {
        return Err(FanOutError {
            failed,
            total: results.len(),
        });
    }
    Ok(results.len() * 2)
}

pub async fn remove_alarms(
    api: &dyn MonitoringApi,
    function_name: &str,
) -> Result<usize, ApiError> {
    let mut deleted = 0;
    for name in naming::alarm_names(function_name) {
        match api.find_alarm(&name).await? {
            Some(existing) => {
                api.delete_alarm(&existing.name).await?;
                tracing::info!(alarm = %existing.name, "alarm deleted");
                deleted += 1;
            }
            None => {
                tracing::info!(function = %function_name, alarm = %name, "no alarm found");
            }
        }
    }
    Ok(deleted)
}
