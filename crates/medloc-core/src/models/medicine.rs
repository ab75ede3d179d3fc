//! Medicine catalog models.

use serde::{Deserialize, Serialize};

/// A single medicine in the reference catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    /// Unique catalog identifier
    pub id: u32,
    /// Brand name (e.g., "Dolo")
    pub brand: String,
    /// Generic name (e.g., "Paracetamol")
    pub generic: String,
    /// Strength as printed on the pack (e.g., "650 mg")
    pub strength: String,
    /// Dosage form (e.g., "tablet")
    pub form: String,
    /// Intended use
    pub usage: String,
    /// Side-effect note
    pub side_effects: String,
    /// Ordered ids of medicines that can substitute for this one
    #[serde(default)]
    pub substitutes: Vec<u32>,
}

impl Medicine {
    /// Create a medicine with only the names set.
    pub fn new(id: u32, brand: impl Into<String>, generic: impl Into<String>) -> Self {
        Self {
            id,
            brand: brand.into(),
            generic: generic.into(),
            strength: String::new(),
            form: String::new(),
            usage: String::new(),
            side_effects: String::new(),
            substitutes: Vec::new(),
        }
    }

    /// Check whether either name of this medicine occurs in an already
    /// lowercased query. An empty name occurs in every query.
    pub fn is_named_in(&self, query_lower: &str) -> bool {
        [&self.brand, &self.generic]
            .into_iter()
            .any(|name| query_lower.contains(&name.to_lowercase()))
    }
}
