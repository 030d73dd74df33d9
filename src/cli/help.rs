use crate::Result;
use colored::Colorize;

pub fn run() -> Result<()> {
    println!();
    println!("{}", "Help".cyan().bold());
    println!();
    println!("From the home menu you can:");
    println!("   • Create a new rule: pick an event and the action to run");
    println!("   • View saved rules and enable or disable them");
    println!("   • View the activity log of what rules have done");
    println!("   • Reset the database, which deletes all rules and logs");
    println!();
    println!("Each screen is also a subcommand; see 'rulebox --help'.");
    Ok(())
}
