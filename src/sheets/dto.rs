use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::models::TodoItem;

/// Body posted to the spreadsheet endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SyncPayload {
    pub timestamp: String,
    pub todos: Vec<TodoItem>,
}

impl SyncPayload {
    pub fn new(todos: Vec<TodoItem>, sent_at: DateTime<Utc>) -> Self {
        Self {
            timestamp: sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            todos,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn timestamp_is_iso_8601_utc_with_millis() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 0).unwrap();
        let payload = SyncPayload::new(Vec::new(), at);
        assert_eq!(payload.timestamp, "2026-10-18T09:05:00.000Z");

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["todos"].as_array().unwrap().is_empty());
    }
}
