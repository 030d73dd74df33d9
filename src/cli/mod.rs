//! CLI screens. Each submodule is one destination with a `run`-style
//! entry point; `run_gate` is the shared disclaimer check every gated
//! screen goes through first.

pub mod about;
pub mod help;
pub mod home;
pub mod logs;
pub mod reset;
pub mod rules;
pub mod settings;

use crate::gate::{GateState, SessionGate};
use crate::prefs::PreferenceStore;
use crate::store::RuleDatabase;
use crate::{Context, Result};
use colored::Colorize;

/// Evaluate the acceptance gate, prompting if the flag is unset.
///
/// Returns `Blocked` when the user declines; callers must end the
/// session without doing anything further. Without a terminal the prompt
/// cannot run, so this fails with guidance instead of hanging.
pub fn run_gate(prefs: &dyn PreferenceStore, db: &dyn RuleDatabase) -> Result<GateState> {
    let gate = SessionGate::new(prefs, db);
    if gate.check_acceptance() {
        return Ok(GateState::Accepted);
    }

    let outcome = crate::ui::prompts::disclaimer_prompt().context(
        "the disclaimer has not been accepted yet; \
         run 'rulebox home' in a terminal, or pass --accept-disclaimer once",
    )?;

    let (state, save_error) = gate.prompt_acceptance(outcome);
    if let Some(e) = save_error {
        println!(
            "{}",
            format!(
                "⚠ Could not save your choice ({}). You will be asked again next time.",
                e
            )
            .yellow()
        );
    }

    if state == GateState::Blocked {
        println!();
        println!(
            "{}",
            "Disclaimer declined. Rulebox cannot be used until it is accepted.".yellow()
        );
    }

    Ok(state)
}
