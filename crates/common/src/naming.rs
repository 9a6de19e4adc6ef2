const ERRORS_PREFIX: &str = "LambdaError_";
const THROTTLES_PREFIX: &str = "LambdaThrottles_";

pub fn errors_alarm_name(function_name: &str) -> String {
    format!("{ERRORS_PREFIX}{function_name}")
}

pub fn throttles_alarm_name(function_name: &str) -> String {
    format!("{THROTTLES_PREFIX}{function_name}")
}

pub fn alarm_names(function_name: &str) -> [String; 2] {
    [
        errors_alarm_name(function_name),
        throttles_alarm_name(function_name),
    ]
}
