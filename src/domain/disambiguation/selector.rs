//! Disambiguation selector - picks the single next question to ask.

use tracing::debug;

use crate::domain::classification::{AnswerHistory, Candidate, ProductProfile};
use crate::domain::foundation::ChapterCode;
use crate::domain::questions::{Question, QuestionBank};

/// Selects the highest-value next question for the current session state.
///
/// The selector is pure and stateless: every call is a function of the
/// inputs passed in, so concurrent sessions can share one selector without
/// coordination, and identical inputs always yield the identical question.
#[derive(Debug, Clone, Copy)]
pub struct DisambiguationSelector<'a> {
    bank: &'a QuestionBank,
}

impl<'a> DisambiguationSelector<'a> {
    /// Creates a selector over the given bank.
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Creates a selector over the process-wide default bank.
    pub fn global() -> DisambiguationSelector<'static> {
        DisambiguationSelector::new(QuestionBank::global())
    }

    /// Returns the next question to surface, or `None` once this engine has
    /// exhausted its disambiguation contribution (saturation).
    ///
    /// With no candidates there is nothing to disambiguate between, so the
    /// goal shifts to collecting raw descriptive input: the first general
    /// question is returned unconditionally. That is a fallback policy, not
    /// a failure, and neither history nor profile filters apply to it.
    pub fn select_next_question(
        &self,
        candidates: &[Candidate],
        answers: &AnswerHistory,
        profile: &ProductProfile,
    ) -> Option<&'static Question> {
        if candidates.is_empty() {
            debug!("no candidates; falling back to general description");
            return self.bank.general_questions().first();
        }

        let chapters = distinct_chapters(candidates);
        let mut pool = self.union_for_chapters(&chapters);

        if pool.is_empty() {
            // No chapter present has a dedicated set; offer the general set.
            pool = self.bank.general_questions().iter().collect();
        }

        pool.retain(|q| !answers.contains(q.id));
        pool.retain(|q| !q.is_short_circuited_by(profile));

        if pool.is_empty() {
            debug!(chapters = chapters.len(), "question pool exhausted");
            return None;
        }

        // Stable sort: priority ties keep bank order.
        pool.sort_by_key(|q| q.priority);
        let chosen = pool[0];
        debug!(
            question = chosen.id,
            priority = chosen.priority,
            remaining = pool.len(),
            "selected next question"
        );
        Some(chosen)
    }

    /// Unions the family sets of each distinct chapter, de-duplicating by
    /// question id and preserving first occurrence.
    fn union_for_chapters(&self, chapters: &[&ChapterCode]) -> Vec<&'static Question> {
        let mut pool: Vec<&'static Question> = Vec::new();
        for chapter in chapters {
            for question in self.bank.questions_for_chapter(chapter) {
                if !pool.iter().any(|q| q.id == question.id) {
                    pool.push(question);
                }
            }
        }
        pool
    }
}

/// Distinct chapters across the candidates, in first-seen order.
fn distinct_chapters(candidates: &[Candidate]) -> Vec<&ChapterCode> {
    let mut chapters: Vec<&ChapterCode> = Vec::new();
    for candidate in candidates {
        if !chapters.contains(&&candidate.chapter) {
            chapters.push(&candidate.chapter);
        }
    }
    chapters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questions::ids;

    fn selector() -> DisambiguationSelector<'static> {
        DisambiguationSelector::global()
    }

    fn tshirt() -> Vec<Candidate> {
        vec![Candidate::new("6109100010", "T-shirt coton")]
    }

    mod empty_candidates {
        use super::*;

        #[test]
        fn falls_back_to_first_general_question() {
            let question = selector()
                .select_next_question(&[], &AnswerHistory::new(), &ProductProfile::new())
                .unwrap();
            assert_eq!(question.id, ids::GENERAL_DESCRIPTION);
        }

        #[test]
        fn fallback_ignores_history_and_profile() {
            let mut answers = AnswerHistory::new();
            answers.record(ids::GENERAL_DESCRIPTION, "a cotton shirt");
            let profile = ProductProfile::new().with_material("cotton");

            let question = selector()
                .select_next_question(&[], &answers, &profile)
                .unwrap();
            assert_eq!(question.id, ids::GENERAL_DESCRIPTION);
        }
    }

    mod chapter_union {
        use super::*;

        #[test]
        fn textile_candidate_yields_textile_composition_first() {
            let question = selector()
                .select_next_question(&tshirt(), &AnswerHistory::new(), &ProductProfile::new())
                .unwrap();
            assert_eq!(question.id, ids::TEXTILE_COMPOSITION);
        }

        #[test]
        fn duplicate_chapters_do_not_duplicate_questions() {
            let candidates = vec![
                Candidate::new("6109100010", "T-shirt coton"),
                Candidate::new("6110200000", "Pull coton"),
                Candidate::new("6205200000", "Chemise"),
            ];
            // Chapters 61 and 62 share the textile family; the pool must
            // still surface each question exactly once, composition first.
            let question = selector()
                .select_next_question(&candidates, &AnswerHistory::new(), &ProductProfile::new())
                .unwrap();
            assert_eq!(question.id, ids::TEXTILE_COMPOSITION);
        }

        #[test]
        fn mixed_chapters_union_keeps_first_seen_order_on_ties() {
            // Machinery first in candidate order: its priority-1 question
            // wins the tie against the textile priority-1 question.
            let candidates = vec![
                Candidate::new("8471300000", "Laptop"),
                Candidate::new("6109100010", "T-shirt coton"),
            ];
            let question = selector()
                .select_next_question(&candidates, &AnswerHistory::new(), &ProductProfile::new())
                .unwrap();
            assert_eq!(question.id, ids::MACHINE_POWER);
        }

        #[test]
        fn tie_break_follows_candidate_order_not_bank_order() {
            let candidates = vec![
                Candidate::new("6109100010", "T-shirt coton"),
                Candidate::new("8471300000", "Laptop"),
            ];
            let question = selector()
                .select_next_question(&candidates, &AnswerHistory::new(), &ProductProfile::new())
                .unwrap();
            assert_eq!(question.id, ids::TEXTILE_COMPOSITION);
        }

        #[test]
        fn unknown_chapters_fall_back_to_general_set() {
            let candidates = vec![Candidate::new("9701100000", "Painting")];
            let question = selector()
                .select_next_question(&candidates, &AnswerHistory::new(), &ProductProfile::new())
                .unwrap();
            assert_eq!(question.id, ids::GENERAL_DESCRIPTION);
        }

        #[test]
        fn malformed_chapter_is_silently_excluded() {
            let candidates = vec![
                Candidate::new("x", "fragment"),
                Candidate::new("6109100010", "T-shirt coton"),
            ];
            let question = selector()
                .select_next_question(&candidates, &AnswerHistory::new(), &ProductProfile::new())
                .unwrap();
            assert_eq!(question.id, ids::TEXTILE_COMPOSITION);
        }
    }

    mod filtering {
        use super::*;

        #[test]
        fn answered_question_is_never_reoffered() {
            let mut answers = AnswerHistory::new();
            answers.record(ids::TEXTILE_COMPOSITION, "coton");

            let question = selector()
                .select_next_question(&tshirt(), &answers, &ProductProfile::new())
                .unwrap();
            assert_eq!(question.id, ids::TEXTILE_CONSTRUCTION);
        }

        #[test]
        fn priority_order_across_successive_answers() {
            let mut answers = AnswerHistory::new();
            let sel = selector();
            let profile = ProductProfile::new();

            let first = sel
                .select_next_question(&tshirt(), &answers, &profile)
                .unwrap();
            assert_eq!(first.id, ids::TEXTILE_COMPOSITION);
            answers.record(first.id, "coton");

            let second = sel
                .select_next_question(&tshirt(), &answers, &profile)
                .unwrap();
            assert_eq!(second.id, ids::TEXTILE_CONSTRUCTION);
            answers.record(second.id, "knitted");

            let third = sel
                .select_next_question(&tshirt(), &answers, &profile)
                .unwrap();
            assert_eq!(third.id, ids::TEXTILE_AUDIENCE);
        }

        #[test]
        fn known_composition_suppresses_composition_question() {
            let profile = ProductProfile::new().with_material("cotton");

            let question = selector()
                .select_next_question(&tshirt(), &AnswerHistory::new(), &profile)
                .unwrap();
            assert_eq!(question.id, ids::TEXTILE_CONSTRUCTION);
        }

        #[test]
        fn known_composition_suppresses_general_material_question() {
            let candidates = vec![Candidate::new("9701100000", "Painting")];
            let mut answers = AnswerHistory::new();
            answers.record(ids::GENERAL_DESCRIPTION, "an oil painting");
            answers.record(ids::GENERAL_USE, "decoration");
            let profile = ProductProfile::new().with_material("canvas");

            // Only the material question remains, and the profile kills it.
            let question = selector().select_next_question(&candidates, &answers, &profile);
            assert!(question.is_none());
        }

        #[test]
        fn saturation_after_all_questions_answered() {
            let mut answers = AnswerHistory::new();
            let sel = selector();
            let profile = ProductProfile::new();

            while let Some(question) = sel.select_next_question(&tshirt(), &answers, &profile) {
                assert!(
                    !answers.contains(question.id),
                    "{} was re-offered",
                    question.id
                );
                answers.record(question.id, "whatever");
            }

            assert_eq!(answers.len(), 3);
            assert!(sel
                .select_next_question(&tshirt(), &answers, &profile)
                .is_none());
        }

        #[test]
        fn saturation_reentry_is_idempotent() {
            let mut answers = AnswerHistory::new();
            for id in [
                ids::TEXTILE_COMPOSITION,
                ids::TEXTILE_CONSTRUCTION,
                ids::TEXTILE_AUDIENCE,
            ] {
                answers.record(id, "x");
            }
            let sel = selector();
            let profile = ProductProfile::new();

            assert!(sel
                .select_next_question(&tshirt(), &answers, &profile)
                .is_none());
            assert!(sel
                .select_next_question(&tshirt(), &answers, &profile)
                .is_none());
        }
    }

    mod determinism {
        use super::*;
        use proptest::prelude::*;

        fn all_ids() -> Vec<&'static str> {
            crate::domain::questions::QuestionFamily::all()
                .iter()
                .flat_map(|f| f.questions().iter().map(|q| q.id))
                .collect()
        }

        fn candidate_strategy() -> impl Strategy<Value = Vec<Candidate>> {
            prop::collection::vec(0u8..100, 0..6).prop_map(|chapters| {
                chapters
                    .into_iter()
                    .map(|ch| Candidate::new(format!("{:02}00000000", ch), "generated"))
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn identical_inputs_yield_identical_question(
                candidates in candidate_strategy(),
                answered in proptest::sample::subsequence(all_ids(), 0..=11),
                has_material in any::<bool>(),
            ) {
                let mut answers = AnswerHistory::new();
                for id in answered {
                    answers.record(id, "x");
                }
                let mut profile = ProductProfile::new();
                if has_material {
                    profile = profile.with_material("cotton");
                }

                let sel = selector();
                let first = sel.select_next_question(&candidates, &answers, &profile);
                let second = sel.select_next_question(&candidates, &answers, &profile);
                prop_assert_eq!(first.map(|q| q.id), second.map(|q| q.id));
            }

            #[test]
            fn answered_questions_never_resurface(
                candidates in candidate_strategy(),
                answered in proptest::sample::subsequence(all_ids(), 0..=11),
            ) {
                prop_assume!(!candidates.is_empty());

                let mut answers = AnswerHistory::new();
                for id in &answered {
                    answers.record(*id, "x");
                }

                if let Some(question) = selector().select_next_question(
                    &candidates,
                    &answers,
                    &ProductProfile::new(),
                ) {
                    prop_assert!(!answers.contains(question.id));
                }
            }
        }
    }
}
