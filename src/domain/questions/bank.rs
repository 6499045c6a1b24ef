//! Question bank - validated catalog of all question definitions.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use crate::domain::foundation::{BankValidationError, ChapterCode};

use super::family::QuestionFamily;
use super::question::{Question, QuestionType};
use super::router::ChapterRouter;

/// Process-wide default bank, initialized once and never mutated.
static GLOBAL_BANK: Lazy<QuestionBank> =
    Lazy::new(|| QuestionBank::new().expect("built-in question bank must be valid"));

/// The immutable catalog of question definitions, grouped by family.
///
/// Construction validates the invariants the selector relies on: globally
/// unique question ids, and well-formed option lists (non-empty iff
/// single-select, values unique within a question).
#[derive(Debug, Clone)]
pub struct QuestionBank {
    by_id: HashMap<&'static str, &'static Question>,
}

impl QuestionBank {
    /// Builds and validates the bank from the built-in families.
    pub fn new() -> Result<Self, BankValidationError> {
        let mut by_id: HashMap<&'static str, &'static Question> = HashMap::new();

        for family in QuestionFamily::all() {
            for question in family.questions() {
                Self::validate_options(question)?;
                if by_id.insert(question.id, question).is_some() {
                    return Err(BankValidationError::DuplicateQuestionId {
                        id: question.id.to_string(),
                    });
                }
            }
        }

        debug!(questions = by_id.len(), "question bank initialized");
        Ok(Self { by_id })
    }

    /// Returns the shared process-wide bank.
    pub fn global() -> &'static QuestionBank {
        &GLOBAL_BANK
    }

    /// Returns the ordered question set registered for a chapter.
    ///
    /// Unknown or malformed chapters yield an empty slice, never an error.
    pub fn questions_for_chapter(&self, chapter: &ChapterCode) -> &'static [Question] {
        ChapterRouter::family_for_chapter(chapter)
            .map(|family| family.questions())
            .unwrap_or(&[])
    }

    /// Returns the chapter-agnostic fallback question set.
    pub fn general_questions(&self) -> &'static [Question] {
        QuestionFamily::General.questions()
    }

    /// Looks up a question by its id.
    pub fn question_by_id(&self, id: &str) -> Option<&'static Question> {
        self.by_id.get(id).copied()
    }

    /// Total number of questions across all families.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the bank holds no questions.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    fn validate_options(question: &Question) -> Result<(), BankValidationError> {
        match question.question_type {
            QuestionType::SingleSelect => {
                if question.options.is_empty() {
                    return Err(BankValidationError::MissingOptions {
                        id: question.id.to_string(),
                    });
                }
                for (i, option) in question.options.iter().enumerate() {
                    if question.options[..i].iter().any(|o| o.value == option.value) {
                        return Err(BankValidationError::DuplicateOptionValue {
                            id: question.id.to_string(),
                            value: option.value.to_string(),
                        });
                    }
                }
            }
            QuestionType::YesNo | QuestionType::FreeText => {
                if !question.options.is_empty() {
                    return Err(BankValidationError::UnexpectedOptions {
                        id: question.id.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
