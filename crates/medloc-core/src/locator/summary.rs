//! Headline figures over ranked offers, and the emergency pharmacy list.

use serde::{Deserialize, Serialize};

use super::assembly::DISTANCE_PLACES;
use crate::geo::{distance_km, round_to, GeoPoint};
use crate::models::{Offer, Pharmacy};

/// Quick statistics shown above the result list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuickStats {
    pub lowest_price: Option<f64>,
    pub nearest_pharmacy: Option<String>,
    pub nearest_distance_km: Option<f64>,
    pub highest_rating: Option<f64>,
}

impl QuickStats {
    /// Summarize a list of offers. Every figure is `None` for an empty list.
    ///
    /// When several offers tie for nearest, the earliest one in the list wins.
    pub fn from_offers(offers: &[Offer]) -> Self {
        let lowest_price = offers.iter().map(|o| o.price).reduce(f64::min);
        let highest_rating = offers.iter().map(|o| o.rating).reduce(f64::max);
        let nearest = offers.iter().reduce(|best, o| {
            if o.distance_km < best.distance_km {
                o
            } else {
                best
            }
        });

        Self {
            lowest_price,
            nearest_pharmacy: nearest.map(|o| o.pharmacy_name.clone()),
            nearest_distance_km: nearest.map(|o| o.distance_km),
            highest_rating,
        }
    }
}

/// A 24-hour pharmacy and its distance from the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmergencyPharmacy {
    pub pharmacy: Pharmacy,
    pub distance_km: f64,
}

/// Every pharmacy open 24 hours, nearest first.
///
/// Independent of any medicine or inventory. Empty without a position.
pub fn emergency_pharmacies(
    pharmacies: &[Pharmacy],
    position: Option<GeoPoint>,
) -> Vec<EmergencyPharmacy> {
    let Some(position) = position else {
        return Vec::new();
    };

    let mut open: Vec<EmergencyPharmacy> = pharmacies
        .iter()
        .filter(|p| p.open_24h)
        .map(|p| EmergencyPharmacy {
            pharmacy: p.clone(),
            distance_km: round_to(distance_km(position, p.position()), DISTANCE_PLACES),
        })
        .collect();

    open.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    open
}
