use serde::{Deserialize, Serialize};

use crate::catalog::TagFilter;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WatchEvent {
    pub request_type: Option<RequestType>,
    pub tag_filter: Option<TagFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WatchSummary {
    pub functions: usize,
    pub alarms_submitted: usize,
    pub alarms_deleted: usize,
    pub dashboard_updated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_event_deserializes() {
        let event: WatchEvent = serde_json::from_str(
            r#"{"RequestType":"Delete","TagFilter":{"Key":"stack","Value":"orders"}}"#,
        )
        .unwrap();
        assert_eq!(event.request_type, Some(RequestType::Delete));
        assert_eq!(event.tag_filter.unwrap().key, "stack");
    }

    #[test]
    fn empty_event_deserializes() {
        let event: WatchEvent = serde_json::from_str("{}").unwrap();
        assert!(event.request_type.is_none());
        assert!(event.tag_filter.is_none());
    }

    #[test]
    fn unknown_request_type_is_rejected() {
        let result: Result<WatchEvent, _> =
            serde_json::from_str(r#"{"RequestType":"Reboot"}"#);
        assert!(result.is_err());
    }
}
