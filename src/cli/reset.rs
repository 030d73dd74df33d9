//! Confirm-then-destroy database reset.

use crate::gate::{GateState, ResetAction, ResetOutcome, SessionGate};
use crate::prefs::PreferenceStore;
use crate::store::RuleDatabase;
use crate::Result;
use colored::Colorize;

/// `yes` answers the confirmation up front for scripted use; without it
/// the user gets the dangerous-action prompt (default No).
pub fn run(prefs: &dyn PreferenceStore, db: &dyn RuleDatabase, yes: bool) -> Result<()> {
    if super::run_gate(prefs, db)? == GateState::Blocked {
        return Ok(());
    }

    let outcome = if yes {
        ResetOutcome::Confirm
    } else {
        crate::ui::prompts::reset_confirm()?
    };

    let gate = SessionGate::new(prefs, db);
    match gate.request_reset(outcome)? {
        ResetAction::Performed => {
            println!("{}", "✓ Database reset. All rules and logs removed.".green());
        }
        ResetAction::Cancelled => {
            println!("{}", "Cancelled. Nothing was changed.".bright_black());
        }
    }
    Ok(())
}
