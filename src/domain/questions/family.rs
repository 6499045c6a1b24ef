//! Question families - shared question sets per chapter group.
//!
//! Disambiguating attributes (material, construction, function) are shared
//! across a family of chapters rather than unique per chapter, so the bank
//! groups related chapters onto one named set instead of duplicating lists.

use serde::Serialize;

use super::question::{ids, Question, QuestionOption, QuestionType, ShortCircuit};

/// A named question set shared by a group of related chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionFamily {
    /// Textiles and apparel, chapters 50-63.
    Textile,
    /// Mechanical and electrical machinery, chapters 84-85.
    Machinery,
    /// Prepared foodstuffs, chapters 16-21.
    PreparedFood,
    /// Chapter-agnostic fallback set.
    General,
}

const TEXTILE_QUESTIONS: &[Question] = &[
    Question {
        id: ids::TEXTILE_COMPOSITION,
        label: "What is the main material of the article?",
        question_type: QuestionType::SingleSelect,
        options: &[
            QuestionOption { value: "cotton", label: "Cotton" },
            QuestionOption { value: "wool", label: "Wool" },
            QuestionOption { value: "silk", label: "Silk" },
            QuestionOption { value: "linen", label: "Linen" },
            QuestionOption { value: "synthetic", label: "Synthetic fibres" },
            QuestionOption { value: "mixed", label: "Mixed fibres" },
        ],
        required: true,
        chapter_hints: &["50", "51", "52", "53", "54", "55"],
        priority: 1,
        short_circuit: Some(ShortCircuit::MaterialCompositionKnown),
    },
    Question {
        id: ids::TEXTILE_CONSTRUCTION,
        label: "How is the fabric constructed?",
        question_type: QuestionType::SingleSelect,
        options: &[
            QuestionOption { value: "knitted", label: "Knitted or crocheted" },
            QuestionOption { value: "woven", label: "Woven" },
            QuestionOption { value: "nonwoven", label: "Nonwoven" },
        ],
        required: true,
        chapter_hints: &["56", "61", "62"],
        priority: 2,
        short_circuit: None,
    },
    Question {
        id: ids::TEXTILE_AUDIENCE,
        label: "Who is the garment intended for?",
        question_type: QuestionType::SingleSelect,
        options: &[
            QuestionOption { value: "men", label: "Men or boys" },
            QuestionOption { value: "women", label: "Women or girls" },
            QuestionOption { value: "children", label: "Babies" },
            QuestionOption { value: "unisex", label: "Unisex" },
        ],
        required: true,
        chapter_hints: &["61", "62"],
        priority: 3,
        short_circuit: None,
    },
];

const MACHINERY_QUESTIONS: &[Question] = &[
    Question {
        id: ids::MACHINE_POWER,
        label: "Is the machine electrically powered?",
        question_type: QuestionType::YesNo,
        options: &[],
        required: true,
        chapter_hints: &["84", "85"],
        priority: 1,
        short_circuit: None,
    },
    Question {
        id: ids::MACHINE_FUNCTION,
        label: "What is the machine's primary function?",
        question_type: QuestionType::SingleSelect,
        options: &[
            QuestionOption { value: "processing", label: "Material processing" },
            QuestionOption { value: "lifting", label: "Lifting or handling" },
            QuestionOption { value: "cooling", label: "Cooling or refrigeration" },
            QuestionOption { value: "computing", label: "Data processing" },
            QuestionOption { value: "other", label: "Other" },
        ],
        required: true,
        chapter_hints: &["84", "85"],
        priority: 2,
        short_circuit: None,
    },
    Question {
        id: ids::MACHINE_PORTABLE,
        label: "Is the machine portable?",
        question_type: QuestionType::YesNo,
        options: &[],
        required: true,
        chapter_hints: &["84", "85"],
        priority: 3,
        short_circuit: None,
    },
];

const PREPARED_FOOD_QUESTIONS: &[Question] = &[
    Question {
        id: ids::FOOD_STATE,
        label: "In what state is the product sold?",
        question_type: QuestionType::SingleSelect,
        options: &[
            QuestionOption { value: "fresh", label: "Fresh" },
            QuestionOption { value: "frozen", label: "Frozen" },
            QuestionOption { value: "prepared", label: "Prepared or preserved" },
        ],
        required: true,
        chapter_hints: &["16", "20"],
        priority: 1,
        short_circuit: None,
    },
    Question {
        id: ids::FOOD_PACKAGING,
        label: "How is the product packaged?",
        question_type: QuestionType::SingleSelect,
        options: &[
            QuestionOption { value: "bulk", label: "Bulk" },
            QuestionOption { value: "retail", label: "Retail packaging" },
            QuestionOption { value: "airtight", label: "Airtight containers" },
        ],
        required: true,
        chapter_hints: &["16", "20", "21"],
        priority: 2,
        short_circuit: None,
    },
];

const GENERAL_QUESTIONS: &[Question] = &[
    Question {
        id: ids::GENERAL_DESCRIPTION,
        label: "Describe the product in a few sentences.",
        question_type: QuestionType::FreeText,
        options: &[],
        required: true,
        chapter_hints: &[],
        priority: 1,
        short_circuit: None,
    },
    Question {
        id: ids::GENERAL_USE,
        label: "What is the product's intended use?",
        question_type: QuestionType::FreeText,
        options: &[],
        required: true,
        chapter_hints: &[],
        priority: 2,
        short_circuit: None,
    },
    Question {
        id: ids::GENERAL_MATERIAL,
        label: "What material is the product mainly made of?",
        question_type: QuestionType::FreeText,
        options: &[],
        required: true,
        chapter_hints: &[],
        priority: 3,
        short_circuit: Some(ShortCircuit::MaterialCompositionKnown),
    },
];

impl QuestionFamily {
    /// Returns all families in canonical order.
    pub fn all() -> &'static [QuestionFamily] {
        &[
            QuestionFamily::Textile,
            QuestionFamily::Machinery,
            QuestionFamily::PreparedFood,
            QuestionFamily::General,
        ]
    }

    /// Returns the ordered question list owned by this family.
    pub fn questions(&self) -> &'static [Question] {
        match self {
            Self::Textile => TEXTILE_QUESTIONS,
            Self::Machinery => MACHINERY_QUESTIONS,
            Self::PreparedFood => PREPARED_FOOD_QUESTIONS,
            Self::General => GENERAL_QUESTIONS,
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Textile => "Textiles & Apparel",
            Self::Machinery => "Machinery",
            Self::PreparedFood => "Prepared Foodstuffs",
            Self::General => "General",
        }
    }
}
