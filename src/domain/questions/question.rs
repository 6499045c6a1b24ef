//! Question definitions for the disambiguation bank.

use serde::Serialize;
use std::fmt;

use crate::domain::classification::ProductProfile;

/// Stable identifiers for every question in the built-in bank.
///
/// The interpreter keys its mapping tables on these, so they are shared
/// constants rather than free-floating literals.
pub mod ids {
    pub const TEXTILE_COMPOSITION: &str = "q_textile_composition";
    pub const TEXTILE_CONSTRUCTION: &str = "q_textile_construction";
    pub const TEXTILE_AUDIENCE: &str = "q_textile_audience";

    pub const MACHINE_POWER: &str = "q_machine_power";
    pub const MACHINE_FUNCTION: &str = "q_machine_function";
    pub const MACHINE_PORTABLE: &str = "q_machine_portable";

    pub const FOOD_STATE: &str = "q_food_state";
    pub const FOOD_PACKAGING: &str = "q_food_packaging";

    pub const GENERAL_DESCRIPTION: &str = "q_general_description";
    pub const GENERAL_USE: &str = "q_general_use";
    pub const GENERAL_MATERIAL: &str = "q_general_material";
}

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Exactly two implicit options (yes / no).
    YesNo,
    /// One choice among the question's declared options.
    SingleSelect,
    /// Any non-empty string.
    FreeText,
}

impl QuestionType {
    /// Returns a short label suitable for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::YesNo => "Yes / No",
            Self::SingleSelect => "Single select",
            Self::FreeText => "Free text",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One selectable option of a single-select question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    /// Stable machine value submitted as the raw answer.
    pub value: &'static str,
    /// Human-readable label rendered by the presentation layer.
    pub label: &'static str,
}

/// Declarative suppression predicate evaluated against the product profile.
///
/// A question carrying one of these is skipped once the profile already
/// answers it, without the user ever being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortCircuit {
    /// Skip once `material_composition` is non-empty.
    MaterialCompositionKnown,
}

impl ShortCircuit {
    /// Returns true if the profile already satisfies this predicate.
    pub fn is_satisfied(&self, profile: &ProductProfile) -> bool {
        match self {
            Self::MaterialCompositionKnown => profile.has_known_composition(),
        }
    }
}

/// An immutable question definition from the bank.
///
/// Questions are defined once at process start as static reference data
/// and never mutated per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Stable id, unique across the entire bank.
    pub id: &'static str,
    /// Natural-language prompt.
    pub label: &'static str,
    /// How the question is answered.
    pub question_type: QuestionType,
    /// Declared options; non-empty iff `question_type` is `SingleSelect`.
    pub options: &'static [QuestionOption],
    /// Always true in this design; no optional questions are ever asked.
    pub required: bool,
    /// Chapters this question helps resolve (empty for chapter-agnostic).
    pub chapter_hints: &'static [&'static str],
    /// Lower priority is asked first.
    pub priority: u8,
    /// Profile-aware suppression, if any.
    pub short_circuit: Option<ShortCircuit>,
}

impl Question {
    /// Returns true if the profile makes asking this question redundant.
    pub fn is_short_circuited_by(&self, profile: &ProductProfile) -> bool {
        self.short_circuit
            .map(|sc| sc.is_satisfied(profile))
            .unwrap_or(false)
    }
}
