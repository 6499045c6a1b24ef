//! Product profile - externally extracted product attributes.

use serde::{Deserialize, Serialize};

/// Snapshot of product attributes extracted by the surrounding pipeline.
///
/// Read-only input to question selection: a populated field means the
/// corresponding question no longer needs to be asked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductProfile {
    /// Material keywords already known for the product.
    #[serde(default)]
    pub material_composition: Vec<String>,
    /// Free-form keywords mined from the product description.
    #[serde(default)]
    pub extracted_keywords: Vec<String>,
}

impl ProductProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a known material keyword (builder style, used in tests and setup).
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material_composition.push(material.into());
        self
    }

    /// Returns true if at least one material keyword is known.
    pub fn has_known_composition(&self) -> bool {
        !self.material_composition.is_empty()
    }
}
