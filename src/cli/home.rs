//! Interactive home screen: gate first, then a menu over the screens.

use crate::gate::GateState;
use crate::nav::{Navigator, Screen};
use crate::prefs::PreferenceStore;
use crate::store::RuleDatabase;
use crate::Result;
use colored::Colorize;
use dialoguer::Select;

/// Screens offered on the home menu, in display order.
const HOME_SCREENS: &[Screen] = &[
    Screen::NewRule,
    Screen::Rules,
    Screen::Logs,
    Screen::Help,
    Screen::About,
    Screen::Settings,
];

/// Dispatcher that runs the selected screen in-process.
struct CliNavigator<'a> {
    prefs: &'a dyn PreferenceStore,
    db: &'a dyn RuleDatabase,
}

impl Navigator for CliNavigator<'_> {
    fn navigate_to(&self, screen: Screen) -> Result<()> {
        match screen {
            Screen::NewRule => super::rules::create(self.db),
            Screen::Rules => super::rules::list(self.db),
            Screen::Logs => super::logs::run(self.db),
            Screen::Help => super::help::run(),
            Screen::About => super::about::run(),
            Screen::Settings => super::settings::run(self.prefs),
        }
    }
}

pub fn run(prefs: &dyn PreferenceStore, db: &dyn RuleDatabase) -> Result<()> {
    if super::run_gate(prefs, db)? == GateState::Blocked {
        return Ok(());
    }

    let nav = CliNavigator { prefs, db };

    let mut items: Vec<&str> = HOME_SCREENS.iter().map(Screen::label).collect();
    items.push("Reset database");
    items.push("Quit");
    let reset_index = items.len() - 2;
    let quit_index = items.len() - 1;

    loop {
        println!();
        println!("{}", "rulebox".cyan().bold());

        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        if selection == quit_index {
            return Ok(());
        }
        if selection == reset_index {
            super::reset::run(prefs, db, false)?;
            continue;
        }
        nav.navigate_to(HOME_SCREENS[selection])?;
    }
}
