use crate::store::RuleDatabase;
use crate::Result;
use colored::Colorize;

pub fn run(db: &dyn RuleDatabase) -> Result<()> {
    let logs = db.list_logs()?;

    println!();
    println!("{}", "Activity log".green().bold());
    if logs.is_empty() {
        println!("{}", "No log entries yet.".yellow());
        return Ok(());
    }

    for entry in logs {
        let when = entry.timestamp.format("%Y-%m-%d %H:%M:%S");
        if entry.rule_name.is_empty() {
            println!("   {} {}", when.to_string().bright_black(), entry.message);
        } else {
            println!(
                "   {} {}: {}",
                when.to_string().bright_black(),
                entry.rule_name.bold(),
                entry.message
            );
        }
    }
    Ok(())
}
