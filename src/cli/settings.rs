use crate::gate::DISCLAIMER_KEY;
use crate::prefs::PreferenceStore;
use crate::Result;
use colored::Colorize;

pub fn run(prefs: &dyn PreferenceStore) -> Result<()> {
    let accepted = prefs.get_bool(DISCLAIMER_KEY, false).unwrap_or(false);

    println!();
    println!("{}", "Settings".cyan().bold());
    println!();
    println!(
        "Disclaimer accepted: {}",
        if accepted { "yes".green() } else { "no".yellow() }
    );
    if let Ok(dir) = crate::paths::config_dir() {
        println!("Preferences: {}", dir.join("prefs.json").display());
    }
    if let Ok(dir) = crate::paths::data_dir() {
        println!("Database:    {}", dir.display());
    }
    Ok(())
}
