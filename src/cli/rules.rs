use crate::models::{LogEntry, Rule};
use crate::store::RuleDatabase;
use crate::Result;
use colored::Colorize;
use dialoguer::Input;

pub fn list(db: &dyn RuleDatabase) -> Result<()> {
    let rules = db.list_rules()?;

    println!();
    println!("{}", "Saved rules".green().bold());
    if rules.is_empty() {
        println!("{}", "No rules yet. Create one from the home menu.".yellow());
        return Ok(());
    }

    for rule in rules {
        let status = if rule.enabled {
            "enabled".green()
        } else {
            "disabled".bright_black()
        };
        println!(
            "   • {} [{}] when {} do {}",
            rule.name.bold(),
            status,
            rule.event,
            rule.action
        );
    }
    Ok(())
}

/// Interactively create a rule and record it in the log.
pub fn create(db: &dyn RuleDatabase) -> Result<()> {
    println!();
    println!("{}", "Create a new rule".cyan().bold());

    let name: String = Input::new().with_prompt("Rule name").interact_text()?;
    let event: String = Input::new()
        .with_prompt("Triggering event")
        .interact_text()?;
    let action: String = Input::new().with_prompt("Action").interact_text()?;

    let rule = Rule::new(name.trim(), event.trim(), action.trim());
    let log = LogEntry::new(&rule.name, "rule created");
    db.add_rule(rule)?;
    db.append_log(log)?;

    println!("{}", "✓ Rule saved".green());
    Ok(())
}

pub fn set_enabled(db: &dyn RuleDatabase, name: &str, enabled: bool) -> Result<()> {
    db.set_rule_enabled(name, enabled)?;
    db.append_log(LogEntry::new(
        name,
        if enabled { "rule enabled" } else { "rule disabled" },
    ))?;

    let verb = if enabled { "enabled" } else { "disabled" };
    println!("{}", format!("✓ Rule '{}' {}", name, verb).green());
    Ok(())
}
