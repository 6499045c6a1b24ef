//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `classification` - Externally supplied inputs (candidates, answer history, product profile)
//! - `questions` - Question bank, question families, and chapter routing
//! - `disambiguation` - Next-question selection and answer interpretation

pub mod classification;
pub mod disambiguation;
pub mod foundation;
pub mod questions;
