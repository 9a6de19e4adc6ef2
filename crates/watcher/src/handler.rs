use crate::alarms;
use crate::catalog::FunctionCatalog;
use crate::config::WatcherConfig;
use crate::dashboard;
use crate::event::{RequestType, WatchEvent, WatchSummary};
use crate::monitoring::MonitoringApi;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub async fn watch(
    api: &dyn MonitoringApi,
    catalog: &dyn FunctionCatalog,
    cfg: &WatcherConfig,
    event: WatchEvent,
) -> Result<WatchSummary, BoxError> {
    let request_type = event.request_type.unwrap_or(RequestType::Update);
    let functions = catalog
        .applicable_functions(event.tag_filter.as_ref())
        .await?;

    tracing::info!(
        request_type = ?request_type,
        functions = functions.len(),
        "watch event received"
    );

    let mut summary = WatchSummary {
        functions: functions.len(),
        ..Default::default()
    };

    match request_type {
        RequestType::Create | RequestType::Update => {
            summary.alarms_submitted = alarms::update_alarms(api, cfg, &functions).await?;
            dashboard::update_dashboard(api, cfg, &functions).await?;
            summary.dashboard_updated = true;
        }
        RequestType::Delete => {
            for function in &functions {
                summary.alarms_deleted += alarms::remove_alarms(api, &function.name).await?;
            }
        }
    }

    Ok(summary)
}
