//! Session phases of the disambiguation loop.
//!
//! The surrounding pipeline owns the loop; this type is the contract both
//! sides share. Within one session questions are requested and answered
//! strictly one at a time.

use serde::{Deserialize, Serialize};

/// The phase a classification session is in with respect to this engine.
///
/// Flow: `NeedQuestion` → `AwaitingAnswer` → `NeedQuestion` | `Saturated`.
/// `Saturated` is terminal: the pipeline should stop asking the user via
/// this engine, though re-entering the selector stays safe and idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisambiguationPhase {
    /// The pipeline should call the selector.
    NeedQuestion,
    /// A question has been surfaced and the user's answer is pending.
    AwaitingAnswer,
    /// No further useful question remains for this session.
    Saturated,
}

impl DisambiguationPhase {
    /// Returns the phase following a selector call that returned a
    /// question (`true`) or signaled saturation (`false`).
    pub fn after_selection(question_found: bool) -> Self {
        if question_found {
            Self::AwaitingAnswer
        } else {
            Self::Saturated
        }
    }

    /// Returns all valid next phases from this phase.
    pub fn valid_next_phases(&self) -> Vec<Self> {
        match self {
            Self::NeedQuestion => vec![Self::AwaitingAnswer, Self::Saturated],
            Self::AwaitingAnswer => vec![Self::NeedQuestion],
            Self::Saturated => vec![],
        }
    }

    /// Returns true if transition to the target phase is valid.
    pub fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_next_phases().contains(target)
    }

    /// Returns true if the engine has nothing further to contribute.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Saturated)
    }

    /// Returns true if the session is waiting on user input.
    pub fn expects_user_input(&self) -> bool {
        matches!(self, Self::AwaitingAnswer)
    }

    /// Returns a short label suitable for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NeedQuestion => "Selecting question",
            Self::AwaitingAnswer => "Awaiting answer",
            Self::Saturated => "Saturated",
        }
    }
}

impl Default for DisambiguationPhase {
    fn default() -> Self {
        Self::NeedQuestion
    }
}
