use aws_sdk_cloudwatch::types::{
    ComparisonOperator, Dimension, Metric, MetricDataQuery, MetricStat, Statistic,
};
use aws_sdk_cloudwatch::Client;

use watchtower_common::alarm::{self, AlarmSpec, MetricSource};

use super::{ApiError, ExistingAlarm, MonitoringApi};

pub struct CloudWatchMonitoring {
    client: Client,
}

impl CloudWatchMonitoring {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn comparison(op: alarm::Comparison) -> ComparisonOperator {
    match op {
        alarm::Comparison::GreaterThanThreshold => ComparisonOperator::GreaterThanThreshold,
        alarm::Comparison::GreaterThanOrEqualToThreshold => {
            ComparisonOperator::GreaterThanOrEqualToThreshold
        }
        alarm::Comparison::LessThanThreshold => ComparisonOperator::LessThanThreshold,
        alarm::Comparison::LessThanOrEqualToThreshold => {
            ComparisonOperator::LessThanOrEqualToThreshold
        }
    }
}

fn statistic(stat: alarm::Stat) -> Statistic {
    match stat {
        alarm::Stat::Sum => Statistic::Sum,
        alarm::Stat::Average => Statistic::Average,
        alarm::Stat::Minimum => Statistic::Minimum,
        alarm::Stat::Maximum => Statistic::Maximum,
        alarm::Stat::SampleCount => Statistic::SampleCount,
    }
}

fn dimension(d: &alarm::MetricDimension) -> Result<Dimension, ApiError> {
    Ok(Dimension::builder()
        .name(&d.name)
        .value(&d.value)
        .build())
}

fn metric_stat(source: &alarm::StatSource) -> Result<MetricStat, ApiError> {
    let mut metric = Metric::builder()
        .namespace(&source.namespace)
        .metric_name(&source.metric_name);
    for d in &source.dimensions {
        metric = metric.dimensions(dimension(d)?);
    }
    Ok(MetricStat::builder()
        .metric(metric.build())
        .period(source.period_seconds)
        .stat(source.stat.as_str())
        .build())
}

fn math_query(q: &alarm::MathQuery) -> Result<MetricDataQuery, ApiError> {
    let mut builder = MetricDataQuery::builder()
        .id(&q.id)
        .return_data(q.return_data);
    if let Some(expression) = &q.expression {
        builder = builder.expression(expression);
    }
    if let Some(label) = &q.label {
        builder = builder.label(label);
    }
    if let Some(stat) = &q.stat {
        builder = builder.metric_stat(metric_stat(stat)?);
    }
    Ok(builder.build())
}

#[async_trait::async_trait]
impl MonitoringApi for CloudWatchMonitoring {
    async fn put_alarm(&self, spec: &AlarmSpec) -> Result<(), ApiError> {
        let mut req = self
            .client
            .put_metric_alarm()
            .alarm_name(&spec.name)
            .alarm_description(&spec.description)
            .comparison_operator(comparison(spec.comparison))
            .threshold(spec.threshold)
            .evaluation_periods(spec.evaluation_periods)
            .actions_enabled(spec.actions_enabled);

        for action in &spec.alarm_actions {
            req = req.alarm_actions(action);
        }
        if let Some(n) = spec.datapoints_to_alarm {
            req = req.datapoints_to_alarm(n);
        }

        match &spec.source {
            MetricSource::Single(source) => {
                req = req
                    .namespace(&source.namespace)
                    .metric_name(&source.metric_name)
                    .statistic(statistic(source.stat))
                    .period(source.period_seconds);
                for d in &source.dimensions {
                    req = req.dimensions(dimension(d)?);
                }
            }
            MetricSource::Math(queries) => {
                for q in queries {
                    req = req.metrics(math_query(q)?);
                }
            }
        }

        req.send().await.map_err(|e| ApiError(e.to_string()))?;
        Ok(())
    }

    async fn find_alarm(&self, name: &str) -> Result<Option<ExistingAlarm>, ApiError> {
        let out = self
            .client
            .describe_alarms()
            .alarm_names(name)
            .send()
            .await
            .map_err(|e| ApiError(e.to_string()))?;

        let found = out
            .metric_alarms
            .unwrap_or_default()
            .into_iter()
            .find(|a| a.alarm_name.as_deref() == Some(name))
            .map(|a| ExistingAlarm {
                name: name.to_string(),
                description: a.alarm_description,
            });
        Ok(found)
    }

    async fn delete_alarm(&self, name: &str) -> Result<(), ApiError> {
        self.client
            .delete_alarms()
            .alarm_names(name)
            .send()
            .await
            .map_err(|e| ApiError(e.to_string()))?;
        Ok(())
    }

    async fn put_dashboard(&self, name: &str, body: &str) -> Result<Vec<String>, ApiError> {
        let out = self
            .client
            .put_dashboard()
            .dashboard_name(name)
            .dashboard_body(body)
            .send()
            .await
            .map_err(|e| ApiError(e.to_string()))?;

        let messages = out
            .dashboard_validation_messages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| m.message)
            .collect();
        Ok(messages)
    }
}
