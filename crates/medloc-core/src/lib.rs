//! Medicine Locator Core Library
//!
//! Matches a free-text medicine query against a small catalog and ranks the
//! pharmacies that stock it by a weighted score.
//!
//! # Architecture
//!
//! ```text
//! Typed text ─┐
//! Photo → OCR ├─→ Query → Catalog Match → Offer Assembly → Filter & Score → Sort
//! Voice → STT ┘                               │                              │
//!                                   pharmacies × inventory            ranked list
//!                                   distance from user                 + best offer
//! ```
//!
//! # Core Principle
//!
//! **Every input change re-runs the whole pipeline.** The engine holds no
//! state between calls, and empty results are ordinary outcomes, not errors.
//!
//! # Modules
//!
//! - [`geo`]: Haversine distance
//! - [`models`]: Domain types (Medicine, Pharmacy, Offer, SearchFilters, etc.)
//! - [`dataset`]: Reference dataset, sample data and JSON loading
//! - [`locator`]: Matching, offer assembly, ranking and summaries
//! - [`db`]: SQLite seed store

pub mod dataset;
pub mod db;
pub mod geo;
pub mod locator;
pub mod models;

// Re-export commonly used types
pub use dataset::{Dataset, DatasetError};
pub use db::Database;
pub use geo::{distance_km, GeoPoint};
pub use locator::{EmergencyPharmacy, Locator, QuickStats, SearchOutcome};
pub use models::{
    Inventory, Medicine, Offer, Pharmacy, RankedOffers, ScoreBreakdown, SearchFilters,
    SearchRequest, SortKey, StockLevel, FALLBACK_POSITION,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MedLocatorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dataset error: {0}")]
    DatasetError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<DatasetError> for MedLocatorError {
    fn from(e: DatasetError) -> Self {
        MedLocatorError::DatasetError(e.to_string())
    }
}

impl From<db::DbError> for MedLocatorError {
    fn from(e: db::DbError) -> Self {
        MedLocatorError::DatabaseError(e.to_string())
    }
}

impl From<serde_json::Error> for MedLocatorError {
    fn from(e: serde_json::Error) -> Self {
        MedLocatorError::SerializationError(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open a locator over the built-in sample dataset.
#[uniffi::export]
pub fn open_sample_locator() -> Arc<MedLocator> {
    Arc::new(MedLocator {
        dataset: Dataset::sample(),
    })
}

/// Open a locator over a dataset given as JSON.
#[uniffi::export]
pub fn open_locator_from_json(json: String) -> Result<Arc<MedLocator>, MedLocatorError> {
    let dataset = Dataset::from_json(&json)?;
    Ok(Arc::new(MedLocator { dataset }))
}

/// Open a locator over a dataset seeded into an SQLite file.
#[uniffi::export]
pub fn open_locator_from_database(path: String) -> Result<Arc<MedLocator>, MedLocatorError> {
    let db = Database::open(&path)?;
    let dataset = db.load_dataset()?;
    dataset.validate()?;
    Ok(Arc::new(MedLocator { dataset }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Read-only locator handed to the presentation layer.
#[derive(uniffi::Object)]
pub struct MedLocator {
    dataset: Dataset,
}

#[uniffi::export]
impl MedLocator {
    /// Run a search. Call again on every input change.
    pub fn search(&self, request: FfiSearchRequest) -> Result<FfiSearchOutcome, MedLocatorError> {
        let request = SearchRequest::try_from(request)?;
        let outcome = Locator::new(&self.dataset).locate(&request);
        Ok(outcome.into())
    }

    /// Run a search described as JSON and return the outcome as JSON.
    pub fn search_json(&self, request_json: String) -> Result<String, MedLocatorError> {
        let request: SearchRequest = serde_json::from_str(&request_json)?;
        let outcome = Locator::new(&self.dataset).locate(&request);
        Ok(serde_json::to_string(&outcome)?)
    }

    /// Emergency mode: 24-hour pharmacies nearest first.
    pub fn emergency(&self, lat: f64, lon: f64) -> Vec<FfiEmergencyPharmacy> {
        Locator::new(&self.dataset)
            .emergency(Some(GeoPoint::new(lat, lon)))
            .into_iter()
            .map(|e| e.into())
            .collect()
    }

    /// Number of medicines in the catalog.
    pub fn medicine_count(&self) -> u32 {
        self.dataset.medicines.len() as u32
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe search request.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSearchRequest {
    pub query: String,
    /// Both or neither of `lat`/`lon` must be set
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius_km: f64,
    pub price_cap: f64,
    pub open_now_only: bool,
    /// "score", "price", "distance" or "rating"; anything else sorts by score
    pub sort_by: String,
}

impl TryFrom<FfiSearchRequest> for SearchRequest {
    type Error = MedLocatorError;

    fn try_from(req: FfiSearchRequest) -> Result<Self, Self::Error> {
        let position = match (req.lat, req.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            (None, None) => None,
            _ => {
                return Err(MedLocatorError::InvalidInput(
                    "lat and lon must be given together".into(),
                ))
            }
        };
        if req.radius_km.is_nan() || req.price_cap.is_nan() {
            return Err(MedLocatorError::InvalidInput(
                "radius and price cap must be numbers".into(),
            ));
        }

        Ok(SearchRequest {
            query: req.query,
            position,
            filters: SearchFilters {
                radius_km: req.radius_km,
                price_cap: req.price_cap,
                open_now_only: req.open_now_only,
                sort_by: SortKey::parse(&req.sort_by),
            },
        })
    }
}

/// FFI-safe medicine.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicine {
    pub id: u32,
    pub brand: String,
    pub generic: String,
    pub strength: String,
    pub form: String,
    pub usage: String,
    pub side_effects: String,
}

impl From<Medicine> for FfiMedicine {
    fn from(med: Medicine) -> Self {
        Self {
            id: med.id,
            brand: med.brand,
            generic: med.generic,
            strength: med.strength,
            form: med.form,
            usage: med.usage,
            side_effects: med.side_effects,
        }
    }
}

/// FFI-safe ranked offer.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiOffer {
    pub pharmacy_id: u32,
    pub pharmacy_name: String,
    pub lat: f64,
    pub lon: f64,
    pub address: String,
    pub open_24h: bool,
    pub rating: f64,
    pub price: f64,
    pub availability: i32,
    pub distance_km: f64,
    pub score: Option<f64>,
}

impl From<Offer> for FfiOffer {
    fn from(offer: Offer) -> Self {
        Self {
            pharmacy_id: offer.pharmacy_id,
            pharmacy_name: offer.pharmacy_name,
            lat: offer.lat,
            lon: offer.lon,
            address: offer.address,
            open_24h: offer.open_24h,
            rating: offer.rating,
            price: offer.price,
            availability: offer.availability,
            distance_km: offer.distance_km,
            score: offer.score,
        }
    }
}

/// FFI-safe search outcome.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSearchOutcome {
    pub medicine: Option<FfiMedicine>,
    pub substitutes: Vec<FfiMedicine>,
    pub offers: Vec<FfiOffer>,
    pub best: Option<FfiOffer>,
    pub lowest_price: Option<f64>,
    pub nearest_pharmacy: Option<String>,
    pub nearest_distance_km: Option<f64>,
    pub highest_rating: Option<f64>,
}

impl From<SearchOutcome> for FfiSearchOutcome {
    fn from(outcome: SearchOutcome) -> Self {
        let best = outcome.ranked.best().cloned().map(|o| o.into());
        Self {
            medicine: outcome.medicine.map(|m| m.into()),
            substitutes: outcome.substitutes.into_iter().map(|m| m.into()).collect(),
            offers: outcome.ranked.offers.into_iter().map(|o| o.into()).collect(),
            best,
            lowest_price: outcome.stats.lowest_price,
            nearest_pharmacy: outcome.stats.nearest_pharmacy,
            nearest_distance_km: outcome.stats.nearest_distance_km,
            highest_rating: outcome.stats.highest_rating,
        }
    }
}

/// FFI-safe emergency list entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiEmergencyPharmacy {
    pub pharmacy_id: u32,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub address: String,
    pub rating: f64,
    pub services: Vec<String>,
    pub distance_km: f64,
}

impl From<EmergencyPharmacy> for FfiEmergencyPharmacy {
    fn from(entry: EmergencyPharmacy) -> Self {
        Self {
            pharmacy_id: entry.pharmacy.id,
            name: entry.pharmacy.name,
            lat: entry.pharmacy.lat,
            lon: entry.pharmacy.lon,
            address: entry.pharmacy.address,
            rating: entry.pharmacy.rating,
            services: entry.pharmacy.services,
            distance_km: entry.distance_km,
        }
    }
}
