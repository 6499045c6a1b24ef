//! ChapterCode value object - two-character HS chapter identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-character HS chapter code (e.g. "61", "84").
///
/// The chapter is the top-level grouping of a tariff code and is the only
/// part of a candidate the disambiguation engine inspects. Malformed codes
/// are representable on purpose: they simply match no router entry and
/// contribute no chapter-specific questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterCode(String);

impl ChapterCode {
    /// Creates a chapter code from a raw string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Derives the chapter from a full tariff code (leading two characters).
    ///
    /// A code shorter than two characters yields the code itself, which is
    /// malformed and therefore routes nowhere.
    pub fn from_tariff_code(code: &str) -> Self {
        let prefix: String = code.chars().take(2).collect();
        Self(prefix)
    }

    /// Returns the chapter code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the code is exactly two ASCII digits.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 2 && self.0.chars().all(|c| c.is_ascii_digit())
    }

    /// Returns the chapter as a number, if well-formed.
    pub fn as_number(&self) -> Option<u8> {
        if self.is_well_formed() {
            self.0.parse().ok()
        } else {
            None
        }
    }
}

impl fmt::Display for ChapterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChapterCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tariff_code_takes_leading_two_digits() {
        let chapter = ChapterCode::from_tariff_code("6109100010");
        assert_eq!(chapter.as_str(), "61");
    }

    #[test]
    fn from_tariff_code_tolerates_short_input() {
        let chapter = ChapterCode::from_tariff_code("6");
        assert_eq!(chapter.as_str(), "6");
        assert!(!chapter.is_well_formed());
    }

    #[test]
    fn well_formed_requires_two_ascii_digits() {
        assert!(ChapterCode::new("61").is_well_formed());
        assert!(ChapterCode::new("07").is_well_formed());
        assert!(!ChapterCode::new("6").is_well_formed());
        assert!(!ChapterCode::new("615").is_well_formed());
        assert!(!ChapterCode::new("6a").is_well_formed());
        assert!(!ChapterCode::new("").is_well_formed());
    }

    #[test]
    fn as_number_parses_well_formed_codes() {
        assert_eq!(ChapterCode::new("61").as_number(), Some(61));
        assert_eq!(ChapterCode::new("07").as_number(), Some(7));
        assert_eq!(ChapterCode::new("xx").as_number(), None);
    }

    #[test]
    fn display_shows_raw_code() {
        assert_eq!(format!("{}", ChapterCode::new("84")), "84");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ChapterCode::new("61")).unwrap();
        assert_eq!(json, "\"61\"");

        let chapter: ChapterCode = serde_json::from_str("\"84\"").unwrap();
        assert_eq!(chapter.as_str(), "84");
    }
}
