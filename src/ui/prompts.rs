//! Modal prompts, translated to the gate's outcome enums.
//!
//! Only this module touches dialoguer. The gate consumes the enums and
//! never sees a widget, so tests drive it with plain values.

use crate::gate::{PromptOutcome, ResetOutcome};
use crate::Result;
use colored::Colorize;
use dialoguer::Confirm;

const DISCLAIMER_TEXT: &str = "\
Rulebox runs automation rules you define on your own machine. Rules can \
act on your data without further confirmation once enabled. You are \
responsible for reviewing what a rule does before enabling it; rulebox \
ships with no warranty of any kind.";

/// Show the disclaimer and require an explicit decision.
///
/// Fails when no interactive terminal is available; the caller turns that
/// into guidance rather than assuming either outcome.
pub fn disclaimer_prompt() -> Result<PromptOutcome> {
    println!();
    println!("{}", "Welcome to rulebox".cyan().bold());
    println!();
    println!("{}", DISCLAIMER_TEXT);
    println!();

    let accepted = Confirm::new()
        .with_prompt("Do you accept these terms?")
        .default(false)
        .interact()?;

    Ok(if accepted {
        PromptOutcome::Accept
    } else {
        PromptOutcome::Decline
    })
}

/// Confirm the destructive database reset. Default answer is No.
pub fn reset_confirm() -> Result<ResetOutcome> {
    println!();
    println!(
        "{}",
        "⚠ This deletes ALL saved rules and logs. It cannot be undone."
            .red()
            .bold()
    );

    let confirmed = Confirm::new()
        .with_prompt("Reset the database?")
        .default(false)
        .interact()?;

    Ok(if confirmed {
        ResetOutcome::Confirm
    } else {
        ResetOutcome::Cancel
    })
}
