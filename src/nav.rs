//! Navigation - the screens reachable from the home menu
//!
//! The dispatcher is opaque to the gate: gating happens before any
//! navigation, never inside it.

use anyhow::Result;

/// Destinations the home screen can launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    NewRule,
    Rules,
    Logs,
    Help,
    About,
    Settings,
}

impl Screen {
    /// Menu label shown on the home screen.
    pub fn label(&self) -> &'static str {
        match self {
            Screen::NewRule => "Create a new rule",
            Screen::Rules => "View saved rules",
            Screen::Logs => "View logs",
            Screen::Help => "Help",
            Screen::About => "About",
            Screen::Settings => "Settings",
        }
    }
}

pub trait Navigator {
    fn navigate_to(&self, screen: Screen) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Mutex<Vec<Screen>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&self, screen: Screen) -> Result<()> {
            self.visited.lock().unwrap().push(screen);
            Ok(())
        }
    }

    #[test]
    fn test_navigator_receives_requested_screen() {
        let nav = RecordingNavigator::default();
        nav.navigate_to(Screen::Rules).unwrap();
        nav.navigate_to(Screen::Logs).unwrap();
        assert_eq!(*nav.visited.lock().unwrap(), vec![Screen::Rules, Screen::Logs]);
    }

    #[test]
    fn test_labels_are_distinct() {
        let screens = [
            Screen::NewRule,
            Screen::Rules,
            Screen::Logs,
            Screen::Help,
            Screen::About,
            Screen::Settings,
        ];
        for (i, a) in screens.iter().enumerate() {
            for b in &screens[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
