// Rulebox - Local Automation Rule Manager
// Gates first use behind a disclaimer and guards the destructive reset

pub mod cli;
pub mod gate;
pub mod models;
pub mod nav;
pub mod paths;
pub mod prefs;
pub mod store;
pub mod ui;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use gate::{GateState, PromptOutcome, ResetAction, ResetOutcome, SessionGate};
pub use models::{LogEntry, Rule};
pub use prefs::{JsonPreferenceStore, PreferenceStore};
pub use store::{JsonRuleDatabase, RuleDatabase};
