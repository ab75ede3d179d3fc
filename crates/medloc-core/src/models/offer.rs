//! Offer and ranking result models.

use serde::{Deserialize, Serialize};

use super::{Pharmacy, StockLevel};

/// One pharmacy's price and stock for the matched medicine.
///
/// Offers are rebuilt from scratch on every search and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub pharmacy_id: u32,
    pub pharmacy_name: String,
    pub lat: f64,
    pub lon: f64,
    pub address: String,
    pub open_24h: bool,
    pub rating: f64,
    pub price: f64,
    /// Stock quantity from the inventory entry
    pub availability: i32,
    /// Distance from the user in km, two decimal places
    pub distance_km: f64,
    /// Composite score, three decimal places. Lower is better.
    /// `None` until the offer has been through ranking.
    pub score: Option<f64>,
    /// Normalized terms behind `score`
    pub score_breakdown: Option<ScoreBreakdown>,
}

impl Offer {
    /// Build an unscored offer from a pharmacy and its stock level.
    pub fn new(pharmacy: &Pharmacy, level: &StockLevel, distance_km: f64) -> Self {
        Self {
            pharmacy_id: pharmacy.id,
            pharmacy_name: pharmacy.name.clone(),
            lat: pharmacy.lat,
            lon: pharmacy.lon,
            address: pharmacy.address.clone(),
            open_24h: pharmacy.open_24h,
            rating: pharmacy.rating,
            price: level.price,
            availability: level.stock,
            distance_km,
            score: None,
            score_breakdown: None,
        }
    }
}

/// Normalized terms of the composite score, each in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    /// Position of the price between the cheapest and dearest survivor - weight: 40%
    pub price_norm: f64,
    /// Distance relative to the farthest survivor - weight: 30%
    pub distance_norm: f64,
    /// Stock as a fraction of 100, clamped - weight: 20% (applied as 1 - value)
    pub availability_norm: f64,
    /// Rating shortfall from a perfect 5 - weight: 10%
    pub rating_norm: f64,
}

/// Filtered, scored and sorted offers for one search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RankedOffers {
    pub offers: Vec<Offer>,
}

impl RankedOffers {
    /// The head of the list under the active sort, if any offer survived.
    pub fn best(&self) -> Option<&Offer> {
        self.offers.first()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }
}
