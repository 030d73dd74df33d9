use super::{RuleDatabase, StoreError, StoreResult};
use crate::models::{LogEntry, Rule};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory fake that counts `reset_db` invocations, so tests can prove
/// the confirmation gate calls it exactly once or not at all.
#[derive(Default)]
pub struct MemoryRuleDatabase {
    rules: Mutex<Vec<Rule>>,
    logs: Mutex<Vec<LogEntry>>,
    reset_calls: AtomicUsize,
    fail_reset: bool,
}

impl MemoryRuleDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fake whose `reset_db` always fails.
    pub fn failing_reset() -> Self {
        Self {
            fail_reset: true,
            ..Self::default()
        }
    }

    pub fn reset_count(&self) -> usize {
        self.reset_calls.load(Ordering::SeqCst)
    }
}

impl RuleDatabase for MemoryRuleDatabase {
    fn add_rule(&self, rule: Rule) -> StoreResult<()> {
        self.rules.lock().unwrap().push(rule);
        Ok(())
    }

    fn list_rules(&self) -> StoreResult<Vec<Rule>> {
        Ok(self.rules.lock().unwrap().clone())
    }

    fn set_rule_enabled(&self, name: &str, enabled: bool) -> StoreResult<()> {
        let mut rules = self.rules.lock().unwrap();
        let rule = rules
            .iter_mut()
            .find(|r| r.name == name)
            .ok_or_else(|| StoreError::RuleNotFound(name.to_string()))?;
        rule.enabled = enabled;
        Ok(())
    }

    fn append_log(&self, entry: LogEntry) -> StoreResult<()> {
        self.logs.lock().unwrap().push(entry);
        Ok(())
    }

    fn list_logs(&self) -> StoreResult<Vec<LogEntry>> {
        Ok(self.logs.lock().unwrap().clone())
    }

    fn reset_db(&self) -> StoreResult<()> {
        self.reset_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reset {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "simulated reset failure",
            )));
        }
        self.rules.lock().unwrap().clear();
        self.logs.lock().unwrap().clear();
        Ok(())
    }
}
