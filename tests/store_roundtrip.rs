//! Durable store behavior against real files in a temp directory.

use rulebox::models::{LogEntry, Rule};
use rulebox::prefs::{JsonPreferenceStore, PreferenceStore};
use rulebox::store::{JsonRuleDatabase, RuleDatabase, StoreError};
use tempfile::TempDir;

#[test]
fn preference_flag_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.json");

    JsonPreferenceStore::new(&path)
        .set_bool("disclaimer_accepted", true)
        .unwrap();

    // A fresh handle sees the persisted value
    let reopened = JsonPreferenceStore::new(&path);
    assert!(reopened.get_bool("disclaimer_accepted", false).unwrap());
}

#[test]
fn rules_and_logs_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let db = JsonRuleDatabase::new(temp_dir.path());

    db.add_rule(Rule::new("quiet hours", "time-22:00", "silence-phone"))
        .unwrap();
    db.add_rule(Rule::new("low battery", "battery-low", "dim-screen"))
        .unwrap();
    db.append_log(LogEntry::new("quiet hours", "rule created"))
        .unwrap();

    let rules = db.list_rules().unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].name, "quiet hours");
    assert!(rules[0].enabled);

    let logs = db.list_logs().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].message, "rule created");
}

#[test]
fn disable_and_enable_by_name() {
    let temp_dir = TempDir::new().unwrap();
    let db = JsonRuleDatabase::new(temp_dir.path());

    db.add_rule(Rule::new("quiet hours", "time-22:00", "silence-phone"))
        .unwrap();

    db.set_rule_enabled("quiet hours", false).unwrap();
    assert!(!db.list_rules().unwrap()[0].enabled);

    db.set_rule_enabled("quiet hours", true).unwrap();
    assert!(db.list_rules().unwrap()[0].enabled);
}

#[test]
fn enabling_unknown_rule_errors() {
    let temp_dir = TempDir::new().unwrap();
    let db = JsonRuleDatabase::new(temp_dir.path());

    assert!(matches!(
        db.set_rule_enabled("missing", true),
        Err(StoreError::RuleNotFound(_))
    ));
}

#[test]
fn reset_discards_rules_and_logs() {
    let temp_dir = TempDir::new().unwrap();
    let db = JsonRuleDatabase::new(temp_dir.path());

    db.add_rule(Rule::new("quiet hours", "time-22:00", "silence-phone"))
        .unwrap();
    db.append_log(LogEntry::new("quiet hours", "rule created"))
        .unwrap();

    db.reset_db().unwrap();

    assert!(db.list_rules().unwrap().is_empty());
    assert!(db.list_logs().unwrap().is_empty());
}

#[test]
fn reset_on_empty_database_is_ok() {
    let temp_dir = TempDir::new().unwrap();
    let db = JsonRuleDatabase::new(temp_dir.path());

    // Nothing stored yet, both documents missing
    db.reset_db().unwrap();
    assert!(db.list_rules().unwrap().is_empty());
}

#[test]
fn gate_over_durable_store_across_restarts() {
    let temp_dir = TempDir::new().unwrap();
    let prefs_path = temp_dir.path().join("prefs.json");

    // First "run": accept
    {
        let prefs = JsonPreferenceStore::new(&prefs_path);
        let db = JsonRuleDatabase::new(temp_dir.path());
        let gate = rulebox::SessionGate::new(&prefs, &db);
        let (state, err) = gate.evaluate(|| rulebox::PromptOutcome::Accept);
        assert_eq!(state, rulebox::GateState::Accepted);
        assert!(err.is_none());
    }

    // Second "run": no prompt needed
    {
        let prefs = JsonPreferenceStore::new(&prefs_path);
        let db = JsonRuleDatabase::new(temp_dir.path());
        let gate = rulebox::SessionGate::new(&prefs, &db);
        assert!(gate.check_acceptance());
    }
}
