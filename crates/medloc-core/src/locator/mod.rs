//! Medicine locator pipeline.
//!
//! Pipeline: Query → Catalog Match → Offer Assembly → Filter & Score → Sort
//!
//! Every stage is a pure function. The whole pipeline runs again on every
//! input change; nothing is cached between calls.

mod assembly;
mod matcher;
mod ranking;
mod summary;

pub use assembly::*;
pub use matcher::*;
pub use ranking::*;
pub use summary::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::Dataset;
use crate::geo::GeoPoint;
use crate::models::{Medicine, RankedOffers, SearchRequest};

/// Result of one search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchOutcome {
    /// Matched medicine, if the query named one
    pub medicine: Option<Medicine>,
    /// Known substitutes of the matched medicine, in catalog-declared order
    pub substitutes: Vec<Medicine>,
    pub ranked: RankedOffers,
    pub stats: QuickStats,
}

/// Runs searches against a borrowed dataset.
pub struct Locator<'a> {
    dataset: &'a Dataset,
}

impl<'a> Locator<'a> {
    /// Create a locator over a dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Run the full pipeline for one request.
    pub fn locate(&self, request: &SearchRequest) -> SearchOutcome {
        // Step 1: Resolve the query against the catalog
        let medicine = match_medicine(&request.query, &self.dataset.medicines);
        debug!(
            query = %request.query,
            medicine_id = medicine.map(|m| m.id),
            "matched query"
        );

        // Step 2: Join with pharmacies and inventory
        let offers = assemble_offers(
            medicine,
            &self.dataset.pharmacies,
            &self.dataset.inventory,
            request.position,
        );

        // Step 3: Filter, score and sort
        let ranked = rank(offers, &request.filters);
        let stats = QuickStats::from_offers(&ranked.offers);

        let alternatives = medicine
            .map(|m| {
                substitutes(m, &self.dataset.medicines)
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        SearchOutcome {
            medicine: medicine.cloned(),
            substitutes: alternatives,
            ranked,
            stats,
        }
    }

    /// Emergency mode: every 24-hour pharmacy by distance from the user.
    pub fn emergency(&self, position: Option<GeoPoint>) -> Vec<EmergencyPharmacy> {
        emergency_pharmacies(&self.dataset.pharmacies, position)
    }
}
