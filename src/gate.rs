//! SessionGate - first-run acceptance gate and guarded database reset
//!
//! The gate decides, each time the home screen is shown, whether the
//! session may proceed or must end because the user declined the
//! disclaimer. It also mediates the one destructive operation the
//! application offers. The gate owns no widgets: the UI layer runs the
//! modal and hands back an enumerated outcome, so the decision logic here
//! is synchronous and testable against in-memory collaborators.

use crate::prefs::{PreferenceStore, PrefsError};
use crate::store::{RuleDatabase, StoreResult};

/// Preference key recording disclaimer acceptance.
pub const DISCLAIMER_KEY: &str = "disclaimer_accepted";

/// Outcome of the disclaimer modal, chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Accept,
    Decline,
}

/// Outcome of the reset confirmation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Confirm,
    Cancel,
}

/// Where the gate landed for this home display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Normal operation may continue.
    Accepted,
    /// The user declined; the session must end now.
    Blocked,
}

/// What `request_reset` actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetAction {
    Performed,
    Cancelled,
}

pub struct SessionGate<'a> {
    prefs: &'a dyn PreferenceStore,
    db: &'a dyn RuleDatabase,
}

impl<'a> SessionGate<'a> {
    pub fn new(prefs: &'a dyn PreferenceStore, db: &'a dyn RuleDatabase) -> Self {
        Self { prefs, db }
    }

    /// Whether the disclaimer has been accepted.
    ///
    /// An unreadable store reads as "not accepted": the user gets asked
    /// again, which is annoying but never destructive.
    pub fn check_acceptance(&self) -> bool {
        self.prefs.get_bool(DISCLAIMER_KEY, false).unwrap_or(false)
    }

    /// Record the user's disclaimer decision and report the resulting
    /// gate state.
    ///
    /// A failed write does not override the decision the user just made;
    /// the error comes back alongside the state so the caller can warn
    /// that the choice will be asked again next run.
    pub fn prompt_acceptance(&self, outcome: PromptOutcome) -> (GateState, Option<PrefsError>) {
        let (accepted, state) = match outcome {
            PromptOutcome::Accept => (true, GateState::Accepted),
            PromptOutcome::Decline => (false, GateState::Blocked),
        };
        let save_error = self.prefs.set_bool(DISCLAIMER_KEY, accepted).err();
        (state, save_error)
    }

    /// Evaluate the gate for one home display.
    ///
    /// `prompt` runs the modal and is only invoked when the flag is not
    /// already set; scenario "flag already true" never shows a prompt.
    pub fn evaluate(
        &self,
        prompt: impl FnOnce() -> PromptOutcome,
    ) -> (GateState, Option<PrefsError>) {
        if self.check_acceptance() {
            return (GateState::Accepted, None);
        }
        self.prompt_acceptance(prompt())
    }

    /// Carry out the database reset if and only if the user confirmed.
    ///
    /// Cancel is a true no-op: no collaborator call, no state mutation.
    /// A failing reset is reported to the caller instead of being
    /// swallowed the way the historical behavior did.
    pub fn request_reset(&self, outcome: ResetOutcome) -> StoreResult<ResetAction> {
        match outcome {
            ResetOutcome::Confirm => {
                self.db.reset_db()?;
                Ok(ResetAction::Performed)
            }
            ResetOutcome::Cancel => Ok(ResetAction::Cancelled),
        }
    }
}
