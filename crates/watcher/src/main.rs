use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;

use watchtower_watcher::catalog::LambdaCatalog;
use watchtower_watcher::config::WatcherConfig;
use watchtower_watcher::event::WatchEvent;
use watchtower_watcher::handler;
use watchtower_watcher::monitoring::CloudWatchMonitoring;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    let cfg = WatcherConfig::from_env()?;
    tracing::info!(
        topic = %cfg.alarms_topic_arn,
        dashboard = %cfg.dashboard_name,
        max_concurrency = cfg.max_concurrency,
        "watcher configured"
    );

    let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let monitoring = CloudWatchMonitoring::new(aws_sdk_cloudwatch::Client::new(&aws));
    let catalog = LambdaCatalog::new(aws_sdk_lambda::Client::new(&aws));

    let monitoring_ref = &monitoring;
    let catalog_ref = &catalog;
    let cfg_ref = &cfg;

    run(service_fn(move |event: LambdaEvent<WatchEvent>| async move {
        handler::watch(monitoring_ref, catalog_ref, cfg_ref, event.payload).await
    }))
    .await
}
