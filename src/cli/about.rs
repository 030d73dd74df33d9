use crate::Result;
use colored::Colorize;

pub fn run() -> Result<()> {
    println!();
    println!("{}", "About rulebox".cyan().bold());
    println!();
    println!("Local automation rule manager: define rules that react to");
    println!("events on your machine, and review what they did.");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("License: MIT");
    Ok(())
}
