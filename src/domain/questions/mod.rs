//! Question bank, question families, and chapter routing.
//!
//! This module defines:
//! - The `Question` definition types and stable question ids
//! - The `QuestionFamily` sets shared across related chapters
//! - The `ChapterRouter` lookup from chapter code to family
//! - The validated `QuestionBank` catalog

mod bank;
mod family;
mod question;
mod router;

pub use bank::QuestionBank;
pub use family::QuestionFamily;
pub use question::{ids, Question, QuestionOption, QuestionType, ShortCircuit};
pub use router::ChapterRouter;
