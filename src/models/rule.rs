use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An automation rule: when `event` occurs, perform `action`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub id: Uuid,
    pub name: String,
    /// Triggering event, e.g. "sms-received"
    pub event: String,
    /// Action to perform, e.g. "send-notification"
    pub action: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl Rule {
    pub fn new(name: impl Into<String>, event: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            event: event.into(),
            action: action.into(),
            enabled: true,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rule_starts_enabled() {
        let rule = Rule::new("quiet hours", "time-22:00", "silence-phone");
        assert!(rule.enabled);
        assert_eq!(rule.name, "quiet hours");
    }
}
