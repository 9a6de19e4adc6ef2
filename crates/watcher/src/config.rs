use std::env;

pub const DEFAULT_ERRORS_THRESHOLD: f64 = 1.0;
pub const DEFAULT_ERRORS_PERIOD_SECONDS: i32 = 60;
pub const DEFAULT_THROTTLES_THRESHOLD_PC: f64 = 1.0;
pub const DEFAULT_DASHBOARD_NAME: &str = "LambdaOperations";
pub const DEFAULT_MAX_CONCURRENCY: usize = 3;
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone)]
pub struct WatcherConfig {
    pub alarms_topic_arn: String,
    pub errors_threshold: f64,
    pub errors_period_seconds: i32,
    pub throttles_threshold_pc: f64,
    pub dashboard_name: String,
    pub max_concurrency: usize,
    pub region: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(key) => write!(f, "config: {key} is not set"),
            Self::Invalid(key, raw) => write!(f, "config: {key}={raw} is not a valid value"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl WatcherConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            alarms_topic_arn: env::var("SNS_ALARMS_TOPIC")
                .map_err(|_| ConfigError::Missing("SNS_ALARMS_TOPIC"))?,
            errors_threshold: parsed_or("ERRORS_THRESHOLD", DEFAULT_ERRORS_THRESHOLD)?,
            errors_period_seconds: parsed_or(
                "ERRORS_PERIOD_SECONDS",
                DEFAULT_ERRORS_PERIOD_SECONDS,
            )?,
            throttles_threshold_pc: parsed_or(
                "THROTTLES_THRESHOLD_PC",
                DEFAULT_THROTTLES_THRESHOLD_PC,
            )?,
            dashboard_name: env::var("DASHBOARD_NAME")
                .unwrap_or_else(|_| DEFAULT_DASHBOARD_NAME.into()),
            max_concurrency: parsed_or("MAX_CONCURRENCY", DEFAULT_MAX_CONCURRENCY)?,
            region: env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.into()),
        })
    }
}

fn parsed_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid(key, raw)),
        Err(_) => Ok(default),
    }
}
