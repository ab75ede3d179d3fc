//! Pharmacy and inventory models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Highest rating a pharmacy can carry.
pub const MAX_RATING: f64 = 5.0;

/// A pharmacy in the reference dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pharmacy {
    /// Unique pharmacy identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Street address or neighbourhood
    pub address: String,
    /// Whether the pharmacy operates around the clock
    pub open_24h: bool,
    /// Customer rating, 0.0 - 5.0
    pub rating: f64,
    /// Service tags (e.g., ["Delivery", "Card"])
    #[serde(default)]
    pub services: Vec<String>,
}

impl Pharmacy {
    /// Geographic position of this pharmacy.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// Check whether this pharmacy offers a service tag (case-insensitive).
    pub fn offers_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| s.eq_ignore_ascii_case(service))
    }
}

/// Price and stock of one medicine at one pharmacy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StockLevel {
    /// Price in the local currency unit
    pub price: f64,
    /// Stock quantity, 0 - 100 in the sample data but not bounded
    pub stock: i32,
}

/// Inventory keyed by pharmacy id, then medicine id.
///
/// A missing key means the pharmacy does not carry the medicine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Inventory {
    entries: BTreeMap<u32, BTreeMap<u32, StockLevel>>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the stock level of a medicine at a pharmacy, replacing any prior entry.
    pub fn insert(&mut self, pharmacy_id: u32, medicine_id: u32, level: StockLevel) {
        self.entries
            .entry(pharmacy_id)
            .or_default()
            .insert(medicine_id, level);
    }

    /// Look up the stock level of a medicine at a pharmacy.
    pub fn get(&self, pharmacy_id: u32, medicine_id: u32) -> Option<&StockLevel> {
        self.entries.get(&pharmacy_id)?.get(&medicine_id)
    }

    /// Iterate all entries as (pharmacy id, medicine id, level).
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &StockLevel)> + '_ {
        self.entries.iter().flat_map(|(&pharmacy_id, meds)| {
            meds.iter()
                .map(move |(&medicine_id, level)| (pharmacy_id, medicine_id, level))
        })
    }

    /// Total number of (pharmacy, medicine) entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
