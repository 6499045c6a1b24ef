//! Error types for the domain layer.
//!
//! The running engine is total over well-formed input: absence of a next
//! question is expressed with `None`, unknown answers with empty signals.
//! The only fallible operation is question bank construction, which
//! validates the static catalog once at process start.

use thiserror::Error;

/// Errors raised while validating a question bank at construction time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BankValidationError {
    #[error("Duplicate question id '{id}' in bank")]
    DuplicateQuestionId { id: String },

    #[error("Select question '{id}' must define at least one option")]
    MissingOptions { id: String },

    #[error("Question '{id}' is not select-type but defines options")]
    UnexpectedOptions { id: String },

    #[error("Question '{id}' defines duplicate option value '{value}'")]
    DuplicateOptionValue { id: String, value: String },
}
