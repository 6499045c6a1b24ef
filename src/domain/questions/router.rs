//! Chapter router - maps chapter codes onto question families.

use crate::domain::foundation::ChapterCode;

use super::family::QuestionFamily;

/// Routes a chapter code to the question family registered for it.
///
/// Purely a static lookup with no error condition: an unknown or malformed
/// chapter yields `None`, which the selector treats as "no dedicated
/// questions" and covers with the general fallback set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChapterRouter;

impl ChapterRouter {
    /// Returns the dedicated family for a chapter, if one is registered.
    ///
    /// The general fallback family is deliberately not routable here; it is
    /// reached through the selector's fallback policy, never via a chapter.
    pub fn family_for_chapter(chapter: &ChapterCode) -> Option<QuestionFamily> {
        match chapter.as_number()? {
            50..=63 => Some(QuestionFamily::Textile),
            84..=85 => Some(QuestionFamily::Machinery),
            16..=21 => Some(QuestionFamily::PreparedFood),
            _ => None,
        }
    }
}
