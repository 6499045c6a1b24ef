//! Next-question selection and answer interpretation.
//!
//! The two decision points of the engine: `DisambiguationSelector` picks
//! the single highest-value question for the current session state, and
//! `AnswerInterpreter` turns the raw answer into re-scoring signals.
//! `DisambiguationPhase` is the loop contract shared with the pipeline.

mod interpreter;
mod phase;
mod selector;

pub use interpreter::{chapter_affinity, AnswerInterpreter, AnswerSignals, CHAPTER_AFFINITY_PREFIX};
pub use phase::DisambiguationPhase;
pub use selector::DisambiguationSelector;
