use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timestamped record of something the application did on the user's
/// behalf (rule created, rule fired, database reset).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Name of the rule involved, empty for application-level events
    pub rule_name: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(rule_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            rule_name: rule_name.into(),
            message: message.into(),
        }
    }
}
