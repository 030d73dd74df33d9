//! Rule database - the destructive collaborator behind `reset-db`
//!
//! Rules and logs live in two JSON documents; `reset_db` discards both
//! unconditionally. The trait exists so the gate and its tests never
//! depend on the on-disk implementation.

pub mod json;
pub mod memory;

pub use json::JsonRuleDatabase;
pub use memory::MemoryRuleDatabase;

use crate::models::{LogEntry, Rule};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when working with the rule database
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access database file: {0}")]
    Io(#[from] std::io::Error),

    #[error("database file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no rule named '{0}'")]
    RuleNotFound(String),
}

pub trait RuleDatabase {
    fn add_rule(&self, rule: Rule) -> StoreResult<()>;
    fn list_rules(&self) -> StoreResult<Vec<Rule>>;
    fn set_rule_enabled(&self, name: &str, enabled: bool) -> StoreResult<()>;

    fn append_log(&self, entry: LogEntry) -> StoreResult<()>;
    fn list_logs(&self) -> StoreResult<Vec<LogEntry>>;

    /// Discard all stored rules and logs. Irreversible.
    fn reset_db(&self) -> StoreResult<()>;
}
