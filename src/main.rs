use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use rulebox::gate::{PromptOutcome, SessionGate};
use rulebox::{JsonPreferenceStore, JsonRuleDatabase, Result};
use std::io;

#[derive(Parser)]
#[command(name = "rulebox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Local automation rule manager", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Record disclaimer acceptance without showing the prompt
    #[arg(long, global = true)]
    accept_disclaimer: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive home screen (default)
    Home,

    /// Rule operations
    #[command(subcommand)]
    Rules(RulesCommands),

    /// Show the activity log
    Logs,

    /// Delete all saved rules and logs
    #[command(name = "reset-db")]
    ResetDb {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show version and license information
    About,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum RulesCommands {
    /// List saved rules
    List,

    /// Create a rule interactively
    New,

    /// Enable a rule by name
    Enable { name: String },

    /// Disable a rule by name
    Disable { name: String },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Completions need no stores and must work before first acceptance.
    if let Some(Commands::Completions { shell }) = &cli.command {
        generate(*shell, &mut Cli::command(), "rulebox", &mut io::stdout());
        return Ok(());
    }

    let prefs = JsonPreferenceStore::open_default()?;
    let db = JsonRuleDatabase::open_default()?;

    if cli.accept_disclaimer {
        let gate = SessionGate::new(&prefs, &db);
        let (_, save_error) = gate.prompt_acceptance(PromptOutcome::Accept);
        if let Some(e) = save_error {
            anyhow::bail!("could not record disclaimer acceptance: {}", e);
        }
        println!("{}", "✓ Disclaimer accepted".green());
    }

    match cli.command {
        None | Some(Commands::Home) => rulebox::cli::home::run(&prefs, &db)?,

        Some(Commands::Rules(cmd)) => {
            if gate_blocked(&prefs, &db)? {
                return Ok(());
            }
            match cmd {
                RulesCommands::List => rulebox::cli::rules::list(&db)?,
                RulesCommands::New => rulebox::cli::rules::create(&db)?,
                RulesCommands::Enable { name } => {
                    rulebox::cli::rules::set_enabled(&db, &name, true)?
                }
                RulesCommands::Disable { name } => {
                    rulebox::cli::rules::set_enabled(&db, &name, false)?
                }
            }
        }

        Some(Commands::Logs) => {
            if gate_blocked(&prefs, &db)? {
                return Ok(());
            }
            rulebox::cli::logs::run(&db)?;
        }

        Some(Commands::ResetDb { yes }) => rulebox::cli::reset::run(&prefs, &db, yes)?,

        Some(Commands::About) => rulebox::cli::about::run()?,

        // Handled before the stores are opened
        Some(Commands::Completions { .. }) => unreachable!(),
    }

    Ok(())
}

fn gate_blocked(prefs: &JsonPreferenceStore, db: &JsonRuleDatabase) -> Result<bool> {
    Ok(rulebox::cli::run_gate(prefs, db)? == rulebox::gate::GateState::Blocked)
}
