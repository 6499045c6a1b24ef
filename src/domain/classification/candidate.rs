//! Candidate - an externally produced classification hypothesis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ChapterCode;

/// A tariff code hypothesis proposed by the external retrieval subsystem.
///
/// The engine only reads `chapter` off each candidate; it never inspects
/// or ranks the full code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Full 10-digit tariff code.
    pub code: String,
    /// Chapter the code belongs to (its leading two digits).
    pub chapter: ChapterCode,
    /// Human-readable description of the hypothesis.
    pub label: String,
}

impl Candidate {
    /// Creates a candidate, deriving the chapter from the code.
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        let code = code.into();
        let chapter = ChapterCode::from_tariff_code(&code);
        Self {
            code,
            chapter,
            label: label.into(),
        }
    }
}
