use super::{RuleDatabase, StoreError, StoreResult};
use crate::models::{LogEntry, Rule};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

const RULES_FILE: &str = "rules.json";
const LOGS_FILE: &str = "logs.json";

/// Rule database persisted as two JSON documents under the data directory.
pub struct JsonRuleDatabase {
    rules_path: PathBuf,
    logs_path: PathBuf,
}

impl JsonRuleDatabase {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            rules_path: dir.join(RULES_FILE),
            logs_path: dir.join(LOGS_FILE),
        }
    }

    /// Open the database at the standard data location.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(crate::paths::data_dir()?))
    }

    fn load<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save<T: Serialize>(path: &Path, items: &[T]) -> StoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(items)?)?;
        Ok(())
    }

    fn remove_document(path: &Path) -> StoreResult<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl RuleDatabase for JsonRuleDatabase {
    fn add_rule(&self, rule: Rule) -> StoreResult<()> {
        let mut rules: Vec<Rule> = Self::load(&self.rules_path)?;
        rules.push(rule);
        Self::save(&self.rules_path, &rules)
    }

    fn list_rules(&self) -> StoreResult<Vec<Rule>> {
        Self::load(&self.rules_path)
    }

    fn set_rule_enabled(&self, name: &str, enabled: bool) -> StoreResult<()> {
        let mut rules: Vec<Rule> = Self::load(&self.rules_path)?;
        let rule = rules
            .iter_mut()
            .find(|r| r.name == name)
            .ok_or_else(|| StoreError::RuleNotFound(name.to_string()))?;
        rule.enabled = enabled;
        Self::save(&self.rules_path, &rules)
    }

    fn append_log(&self, entry: LogEntry) -> StoreResult<()> {
        let mut logs: Vec<LogEntry> = Self::load(&self.logs_path)?;
        logs.push(entry);
        Self::save(&self.logs_path, &logs)
    }

    fn list_logs(&self) -> StoreResult<Vec<LogEntry>> {
        Self::load(&self.logs_path)
    }

    fn reset_db(&self) -> StoreResult<()> {
        // Delete both documents even if the first fails, then report the
        // first error so a partial reset is never silent.
        let rules = Self::remove_document(&self.rules_path);
        let logs = Self::remove_document(&self.logs_path);
        rules.and(logs)
    }
}
