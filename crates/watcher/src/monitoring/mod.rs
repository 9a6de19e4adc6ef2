mod cloudwatch;

pub use cloudwatch::CloudWatchMonitoring;

use watchtower_common::alarm::AlarmSpec;

#[derive(Debug)]
pub struct ApiError(pub String);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "monitoring api: {}", self.0)
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, PartialEq)]
pub struct ExistingAlarm {
    pub name: String,
    pub description: Option<String>,
}

#[async_trait::async_trait]
pub trait MonitoringApi: Send + Sync {
    async fn put_alarm(&self, spec: &AlarmSpec) -> Result<(), ApiError>;

    async fn find_alarm(&self, name: &str) -> Result<Option<ExistingAlarm>, ApiError>;

    async fn delete_alarm(&self, name: &str) -> Result<(), ApiError>;

    async fn put_dashboard(&self, name: &str, body: &str) -> Result<Vec<String>, ApiError>;
}
