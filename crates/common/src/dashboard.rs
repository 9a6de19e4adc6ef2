use serde_json::{json, Value};

use crate::alarm::LAMBDA_NAMESPACE;

pub const GRID_WIDTH: i64 = 24;
pub const WIDGET_WIDTH: i64 = 12;
pub const WIDGET_HEIGHT: i64 = 6;

fn grid_position(index: usize) -> (i64, i64) {
    let per_row = GRID_WIDTH / WIDGET_WIDTH;
    let x = (index as i64 % per_row) * WIDGET_WIDTH;
    let y = (index as i64 / per_row) * WIDGET_HEIGHT;
    (x, y)
}

pub fn function_widget(
    function_name: &str,
    region: &str,
    period_seconds: i32,
    index: usize,
) -> Value {
    let (x, y) = grid_position(index);
    json!({
        "type": "metric",
        "x": x,
        "y": y,
        "width": WIDGET_WIDTH,
        "height": WIDGET_HEIGHT,
        "properties": {
            "title": function_name,
            "region": region,
            "view": "timeSeries",
            "stacked": false,
            "stat": "Sum",
            "period": period_seconds,
            "metrics": [
                [LAMBDA_NAMESPACE, "Invocations", "FunctionName", function_name],
                [LAMBDA_NAMESPACE, "Errors", "FunctionName", function_name],
                [LAMBDA_NAMESPACE, "Throttles", "FunctionName", function_name],
            ],
        },
    })
}

pub fn duration_widget(
    function_names: &[&str],
    region: &str,
    period_seconds: i32,
    index: usize,
) -> Value {
    let (x, y) = grid_position(index);
    let metrics: Vec<Value> = function_names
        .iter()
        .map(|name| json!([LAMBDA_NAMESPACE, "Duration", "FunctionName", name]))
        .collect();
    json!({
        "type": "metric",
        "x": x,
        "y": y,
        "width": WIDGET_WIDTH,
        "height": WIDGET_HEIGHT,
        "properties": {
            "title": "Duration",
            "region": region,
            "view": "timeSeries",
            "stacked": false,
            "stat": "Average",
            "period": period_seconds,
            "metrics": metrics,
        },
    })
}

pub fn dashboard_body(region: &str, function_names: &[String], period_seconds: i32) -> Value {
    let mut names: Vec<&str> = function_names.iter().map(String::as_str).collect();
    names.sort_unstable();
    names.dedup();

    let mut widgets: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| function_widget(name, region, period_seconds, i))
        .collect();

    if !names.is_empty() {
        let index = widgets.len();
        widgets.push(duration_widget(&names, region, period_seconds, index));
    }

    json!({ "widgets": widgets })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_widget_per_function_plus_duration() {
        let body = dashboard_body("eu-west-1", &names(&["a", "b", "c"]), 60);
        let widgets = body["widgets"].as_array().unwrap();
        assert_eq!(widgets.len(), 4);
    }

    #[test]
    fn empty_catalog_renders_empty_dashboard() {
        let body = dashboard_body("eu-west-1", &[], 60);
        assert_eq!(body["widgets"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn grid_wraps_two_per_row() {
        let body = dashboard_body("eu-west-1", &names(&["a", "b", "c"]), 60);
        let widgets = body["widgets"].as_array().unwrap();

        assert_eq!(widgets[0]["x"], 0);
        assert_eq!(widgets[0]["y"], 0);
        assert_eq!(widgets[1]["x"], 12);
        assert_eq!(widgets[1]["y"], 0);
        assert_eq!(widgets[2]["x"], 0);
        assert_eq!(widgets[2]["y"], 6);
        assert_eq!(widgets[3]["x"], 12);
        assert_eq!(widgets[3]["y"], 6);
    }

    #[test]
    fn body_is_deterministic_for_unordered_input() {
        let a = dashboard_body("eu-west-1", &names(&["b", "a"]), 60);
        let b = dashboard_body("eu-west-1", &names(&["a", "b"]), 60);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn function_widget_charts_traffic_metrics() {
        let widget = function_widget("checkout", "eu-west-1", 60, 0);
        let metrics = widget["properties"]["metrics"].as_array().unwrap();
        assert_eq!(metrics.len(), 3);
        for row in metrics {
            assert_eq!(row[0], "AWS/Lambda");
            assert_eq!(row[3], "checkout");
        }
        assert_eq!(widget["properties"]["period"], 60);
        assert_eq!(widget["properties"]["stat"], "Sum");
    }

    #[test]
    fn duration_widget_covers_every_function() {
        let widget = duration_widget(&["a", "b"], "eu-west-1", 60, 2);
        let metrics = widget["properties"]["metrics"].as_array().unwrap();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0][1], "Duration");
        assert_eq!(widget["properties"]["stat"], "Average");
    }
}
