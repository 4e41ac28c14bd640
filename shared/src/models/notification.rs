//! Notification Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Priority;
use crate::types::{RecordId, Timestamp, UnvalidatedForeignKey};

/// Broadcast notification record (通知广播)
///
/// `delivered_count` and `read_count` are never derived by the store; whoever
/// tracks delivery writes them through an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: RecordId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: Priority,
    pub recipient_type: String,
    /// Opaque recipient selector (JSON blob)
    pub recipients: Value,
    pub sent_by: UnvalidatedForeignKey,
    pub sent_at: Timestamp,
    pub delivered_count: i64,
    pub read_count: i64,
}

impl Notification {
    pub const DEFAULT_KIND: &'static str = "info";
    pub const DEFAULT_RECIPIENT_TYPE: &'static str = "all";

    pub fn new(id: RecordId, now: Timestamp, data: NotificationCreate) -> Self {
        Self {
            id,
            title: data.title,
            message: data.message,
            kind: data.kind.unwrap_or_else(|| Self::DEFAULT_KIND.to_string()),
            priority: data.priority.unwrap_or_default(),
            recipient_type: data
                .recipient_type
                .unwrap_or_else(|| Self::DEFAULT_RECIPIENT_TYPE.to_string()),
            recipients: data.recipients.unwrap_or(Value::Null),
            sent_by: data.sent_by,
            sent_at: data.sent_at.unwrap_or(now),
            delivered_count: data.delivered_count.unwrap_or(0),
            read_count: data.read_count.unwrap_or(0),
        }
    }

    pub fn apply(&mut self, data: NotificationUpdate) {
        if let Some(v) = data.title {
            self.title = v;
        }
        if let Some(v) = data.message {
            self.message = v;
        }
        if let Some(v) = data.kind {
            self.kind = v;
        }
        if let Some(v) = data.priority {
            self.priority = v;
        }
        if let Some(v) = data.recipient_type {
            self.recipient_type = v;
        }
        if let Some(v) = data.recipients {
            self.recipients = v;
        }
        if let Some(v) = data.delivered_count {
            self.delivered_count = v;
        }
        if let Some(v) = data.read_count {
            self.read_count = v;
        }
    }
}

/// Create notification payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCreate {
    pub title: String,
    pub message: String,
    pub sent_by: UnvalidatedForeignKey,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub recipient_type: Option<String>,
    #[serde(default)]
    pub recipients: Option<Value>,
    #[serde(default)]
    pub sent_at: Option<Timestamp>,
    #[serde(default)]
    pub delivered_count: Option<i64>,
    #[serde(default)]
    pub read_count: Option<i64>,
}

impl NotificationCreate {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        sent_by: UnvalidatedForeignKey,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            sent_by,
            kind: None,
            priority: None,
            recipient_type: None,
            recipients: None,
            sent_at: None,
            delivered_count: None,
            read_count: None,
        }
    }
}

/// Update notification payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationUpdate {
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub priority: Option<Priority>,
    pub recipient_type: Option<String>,
    pub recipients: Option<Value>,
    pub delivered_count: Option<i64>,
    pub read_count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_defaults() {
        let n = Notification::new(1, 42, NotificationCreate::new("Outage", "Sector 4 down", 1));
        assert_eq!(n.kind, "info");
        assert_eq!(n.recipient_type, "all");
        assert_eq!(n.priority, Priority::Medium);
        assert_eq!(n.recipients, Value::Null);
        assert_eq!(n.sent_at, 42);
        assert_eq!(n.delivered_count, 0);
        assert_eq!(n.read_count, 0);
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let n = Notification::new(1, 0, NotificationCreate::new("t", "m", 1));
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "info");
        assert!(json.get("kind").is_none());

        let data: NotificationCreate =
            serde_json::from_str(r#"{"title":"t","message":"m","sentBy":2,"type":"maintenance"}"#)
                .unwrap();
        assert_eq!(data.kind.as_deref(), Some("maintenance"));
    }
}
