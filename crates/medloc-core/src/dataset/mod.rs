//! Reference dataset: medicine catalog, pharmacies and inventory.

mod sample;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Inventory, Medicine, Pharmacy, MAX_RATING};

/// Dataset errors.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate medicine id: {0}")]
    DuplicateMedicine(u32),

    #[error("Duplicate pharmacy id: {0}")]
    DuplicatePharmacy(u32),

    #[error("Inventory references unknown pharmacy: {0}")]
    UnknownPharmacy(u32),

    #[error("Inventory references unknown medicine {medicine_id} at pharmacy {pharmacy_id}")]
    UnknownMedicine { pharmacy_id: u32, medicine_id: u32 },

    #[error("Negative price for medicine {medicine_id} at pharmacy {pharmacy_id}")]
    NegativePrice { pharmacy_id: u32, medicine_id: u32 },

    #[error("Rating {rating} out of range for pharmacy {pharmacy_id}")]
    RatingOutOfRange { pharmacy_id: u32, rating: f64 },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Immutable seed input for the locator. Loaded once, never mutated by a search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    /// Catalog in match order: the first listed medicine wins a tie
    pub medicines: Vec<Medicine>,
    pub pharmacies: Vec<Pharmacy>,
    #[serde(default)]
    pub inventory: Inventory,
}

impl Dataset {
    pub fn new(medicines: Vec<Medicine>, pharmacies: Vec<Pharmacy>, inventory: Inventory) -> Self {
        Self {
            medicines,
            pharmacies,
            inventory,
        }
    }

    /// Parse and validate a dataset from JSON.
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> DatasetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check ids are unique and every inventory entry points at known records.
    ///
    /// Substitute ids are not checked; unknown ones are skipped at lookup.
    pub fn validate(&self) -> DatasetResult<()> {
        let mut medicine_ids = HashSet::new();
        for med in &self.medicines {
            if !medicine_ids.insert(med.id) {
                return Err(DatasetError::DuplicateMedicine(med.id));
            }
        }

        let mut pharmacy_ids = HashSet::new();
        for pharmacy in &self.pharmacies {
            if !pharmacy_ids.insert(pharmacy.id) {
                return Err(DatasetError::DuplicatePharmacy(pharmacy.id));
            }
            if !(0.0..=MAX_RATING).contains(&pharmacy.rating) {
                return Err(DatasetError::RatingOutOfRange {
                    pharmacy_id: pharmacy.id,
                    rating: pharmacy.rating,
                });
            }
        }

        for (pharmacy_id, medicine_id, level) in self.inventory.iter() {
            if !pharmacy_ids.contains(&pharmacy_id) {
                return Err(DatasetError::UnknownPharmacy(pharmacy_id));
            }
            if !medicine_ids.contains(&medicine_id) {
                return Err(DatasetError::UnknownMedicine {
                    pharmacy_id,
                    medicine_id,
                });
            }
            if level.price < 0.0 {
                return Err(DatasetError::NegativePrice {
                    pharmacy_id,
                    medicine_id,
                });
            }
        }

        Ok(())
    }

    /// Get a medicine by id.
    pub fn medicine(&self, id: u32) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }

    /// Get a pharmacy by id.
    pub fn pharmacy(&self, id: u32) -> Option<&Pharmacy> {
        self.pharmacies.iter().find(|p| p.id == id)
    }
}
