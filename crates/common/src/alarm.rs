use serde::{Deserialize, Serialize};

use crate::naming;

pub const LAMBDA_NAMESPACE: &str = "AWS/Lambda";

pub const THROTTLES_EXPRESSION: &str = "(throttles / invocations) * 100";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Comparison {
    GreaterThanThreshold,
    GreaterThanOrEqualToThreshold,
    LessThanThreshold,
    LessThanOrEqualToThreshold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Stat {
    Sum,
    Average,
    Minimum,
    Maximum,
    SampleCount,
}

impl Stat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sum => "Sum",
            Self::Average => "Average",
            Self::Minimum => "Minimum",
            Self::Maximum => "Maximum",
            Self::SampleCount => "SampleCount",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDimension {
    pub name: String,
    pub value: String,
}

pub fn function_dimension(function_name: &str) -> MetricDimension {
    MetricDimension {
        name: "FunctionName".into(),
        value: function_name.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSource {
    pub namespace: String,
    pub metric_name: String,
    pub stat: Stat,
    pub dimensions: Vec<MetricDimension>,
    pub period_seconds: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathQuery {
    pub id: String,
    pub expression: Option<String>,
    pub stat: Option<StatSource>,
    pub label: Option<String>,
    pub return_data: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricSource {
    Single(StatSource),
    Math(Vec<MathQuery>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmSpec {
    pub name: String,
    pub description: String,
    pub comparison: Comparison,
    pub threshold: f64,
    pub evaluation_periods: i32,
    pub datapoints_to_alarm: Option<i32>,
    pub actions_enabled: bool,
    pub alarm_actions: Vec<String>,
    pub source: MetricSource,
}

pub fn errors_alarm(
    function_name: &str,
    threshold: f64,
    period_seconds: i32,
    topic_arn: &str,
) -> AlarmSpec {
    AlarmSpec {
        name: naming::errors_alarm_name(function_name),
        description: format!("Alarm for lambda {function_name} errors"),
        comparison: Comparison::GreaterThanThreshold,
        threshold,
        evaluation_periods: 1,
        datapoints_to_alarm: None,
        actions_enabled: true,
        alarm_actions: vec![topic_arn.into()],
        source: MetricSource::Single(StatSource {
            namespace: LAMBDA_NAMESPACE.into(),
            metric_name: "Errors".into(),
            stat: Stat::Sum,
            dimensions: vec![function_dimension(function_name)],
            period_seconds,
        }),
    }
}

pub fn throttles_alarm(
    function_name: &str,
    threshold_pc: f64,
    period_seconds: i32,
    topic_arn: &str,
) -> AlarmSpec {
    let stat_query = |id: &str, metric_name: &str| MathQuery {
        id: id.into(),
        expression: None,
        stat: Some(StatSource {
            namespace: LAMBDA_NAMESPACE.into(),
            metric_name: metric_name.into(),
            stat: Stat::Sum,
            dimensions: vec![function_dimension(function_name)],
            period_seconds,
        }),
        label: None,
        return_data: false,
    };

    AlarmSpec {
        name: naming::throttles_alarm_name(function_name),
        description: format!("Alarm for Lambda {function_name} throttles/invocations"),
        comparison: Comparison::GreaterThanThreshold,
        threshold: threshold_pc,
        evaluation_periods: 1,
        datapoints_to_alarm: Some(1),
        actions_enabled: true,
        alarm_actions: vec![topic_arn.into()],
        source: MetricSource::Math(vec![
            MathQuery {
                id: "throttles_pc".into(),
                expression: Some(THROTTLES_EXPRESSION.into()),
                stat: None,
                label: Some("% Throttles".into()),
                return_data: true,
            },
            stat_query("throttles", "Throttles"),
            stat_query("invocations", "Invocations"),
        ]),
    }
}
