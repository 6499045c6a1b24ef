//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the tariff disambiguation domain.

mod chapter;
mod errors;

pub use chapter::ChapterCode;
pub use errors::BankValidationError;
