//! Answer interpreter - turns raw answers into re-scoring signals.
//!
//! This is a fixed per-question-id mapping table, not general NLP: each
//! known question id has an explicit rule translating specific answer
//! values into keywords and chapter-affinity hints. Unknown ids or
//! unmapped values yield empty signals; the raw answer itself stays
//! available to the caller for storage and free-text handling.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::questions::ids;

/// Prefix of the opaque chapter-affinity hint tokens.
pub const CHAPTER_AFFINITY_PREFIX: &str = "chapter_affinity:";

/// Builds the opaque hint token biasing the re-scorer toward a chapter.
pub fn chapter_affinity(chapter: &str) -> String {
    format!("{CHAPTER_AFFINITY_PREFIX}{chapter}")
}

/// Keywords and hints extracted from one raw answer.
///
/// Hints are opaque tokens consumed by the external candidate re-scorer;
/// this engine emits them and never stores them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSignals {
    /// Normalized keywords mined from the answer.
    pub keywords: Vec<String>,
    /// Opaque re-scoring hint tokens.
    pub hints: Vec<String>,
}

impl AnswerSignals {
    /// Signals carrying nothing beyond the raw answer.
    pub fn none() -> Self {
        Self::default()
    }

    /// One canonical keyword plus one chapter-affinity hint.
    fn keyword_with_affinity(keyword: &str, chapter: &str) -> Self {
        Self {
            keywords: vec![keyword.to_string()],
            hints: vec![chapter_affinity(chapter)],
        }
    }

    /// A keyword with no hint to emit.
    fn keyword_only(keyword: &str) -> Self {
        Self {
            keywords: vec![keyword.to_string()],
            hints: Vec::new(),
        }
    }

    /// Returns true if neither keywords nor hints were produced.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.hints.is_empty()
    }
}

/// Translates raw answers into structured signals for candidate re-scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerInterpreter;

impl AnswerInterpreter {
    /// Interprets a raw answer for the given question.
    ///
    /// Matching is case-normalized and tolerates surrounding whitespace the
    /// caller may or may not have trimmed. Never fails: anything unmapped
    /// simply yields empty signals.
    pub fn interpret(question_id: &str, raw_answer: &str) -> AnswerSignals {
        let value = raw_answer.trim().to_lowercase();
        let signals = match question_id {
            ids::TEXTILE_COMPOSITION => Self::textile_composition(&value),
            ids::TEXTILE_CONSTRUCTION => Self::textile_construction(&value),
            ids::MACHINE_POWER => Self::machine_power(&value),
            ids::FOOD_STATE => Self::food_state(&value),
            _ => AnswerSignals::none(),
        };
        trace!(
            question = question_id,
            keywords = signals.keywords.len(),
            hints = signals.hints.len(),
            "interpreted answer"
        );
        signals
    }

    fn textile_composition(value: &str) -> AnswerSignals {
        match value {
            "cotton" | "coton" => AnswerSignals::keyword_with_affinity("cotton", "52"),
            "wool" | "laine" => AnswerSignals::keyword_with_affinity("wool", "51"),
            "silk" | "soie" => AnswerSignals::keyword_with_affinity("silk", "50"),
            "linen" | "lin" => AnswerSignals::keyword_with_affinity("linen", "53"),
            "synthetic" | "synthétique" => {
                AnswerSignals::keyword_with_affinity("synthetic", "54")
            }
            "mixed" => AnswerSignals::keyword_only("mixed"),
            _ => AnswerSignals::none(),
        }
    }

    fn textile_construction(value: &str) -> AnswerSignals {
        match value {
            "knitted" | "tricoté" => AnswerSignals::keyword_with_affinity("knitted", "61"),
            "woven" | "tissé" => AnswerSignals::keyword_with_affinity("woven", "62"),
            "nonwoven" => AnswerSignals::keyword_with_affinity("nonwoven", "56"),
            _ => AnswerSignals::none(),
        }
    }

    fn machine_power(value: &str) -> AnswerSignals {
        match value {
            "yes" | "y" | "oui" => AnswerSignals::keyword_with_affinity("electric", "85"),
            "no" | "n" | "non" => AnswerSignals::keyword_with_affinity("mechanical", "84"),
            _ => AnswerSignals::none(),
        }
    }

    fn food_state(value: &str) -> AnswerSignals {
        match value {
            "prepared" => AnswerSignals::keyword_with_affinity("prepared", "20"),
            "frozen" => AnswerSignals::keyword_with_affinity("frozen", "16"),
            "fresh" => AnswerSignals::keyword_only("fresh"),
            _ => AnswerSignals::none(),
        }
    }
}
