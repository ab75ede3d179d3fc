//! Offer filtering, composite scoring and sorting.
//!
//! Scoring weights (lower composite score is better):
//! - Price, relative to the cheapest/dearest survivor: 40%
//! - Distance, relative to the farthest survivor: 30%
//! - Availability penalty, `1 - stock/100`: 20%
//! - Rating penalty, `1 - rating/5`: 10%
//!
//! Normalization bounds come from the offers that survive filtering and are
//! recomputed on every call.

use std::cmp::Ordering;

use tracing::debug;

use crate::geo::round_to;
use crate::models::{
    Offer, RankedOffers, ScoreBreakdown, SearchFilters, SortKey, MAX_RATING,
};

pub const PRICE_WEIGHT: f64 = 0.4;
pub const DISTANCE_WEIGHT: f64 = 0.3;
pub const AVAILABILITY_WEIGHT: f64 = 0.2;
pub const RATING_WEIGHT: f64 = 0.1;

/// Decimal places kept on composite scores.
pub const SCORE_PLACES: i32 = 3;

/// Stock level treated as fully available.
const FULL_STOCK: f64 = 100.0;

impl ScoreBreakdown {
    /// Weighted composite score, rounded to [`SCORE_PLACES`].
    pub fn weighted_score(&self) -> f64 {
        let raw = self.price_norm * PRICE_WEIGHT
            + self.distance_norm * DISTANCE_WEIGHT
            + (1.0 - self.availability_norm) * AVAILABILITY_WEIGHT
            + self.rating_norm * RATING_WEIGHT;
        round_to(raw, SCORE_PLACES)
    }
}

/// Check a single offer against the distance, price and open-hours filters.
pub fn passes_filters(offer: &Offer, filters: &SearchFilters) -> bool {
    offer.distance_km <= filters.radius_km
        && offer.price <= filters.price_cap
        && (!filters.open_now_only || offer.open_24h)
}

/// Filter, score and sort offers.
///
/// Never fails: when nothing survives the filters the result is empty and
/// has no best offer. Ties keep the incoming order.
pub fn rank(offers: Vec<Offer>, filters: &SearchFilters) -> RankedOffers {
    let candidates = offers.len();
    let mut survivors: Vec<Offer> = offers
        .into_iter()
        .filter(|offer| passes_filters(offer, filters))
        .collect();

    debug!(
        candidates,
        survivors = survivors.len(),
        radius_km = filters.radius_km,
        price_cap = filters.price_cap,
        open_now_only = filters.open_now_only,
        "filtered offers"
    );

    if survivors.is_empty() {
        return RankedOffers::default();
    }

    score_all(&mut survivors);
    sort_offers(&mut survivors, filters.sort_by);

    debug!(
        sort_by = %filters.sort_by,
        best = survivors.first().map(|o| o.pharmacy_id),
        "ranked offers"
    );

    RankedOffers { offers: survivors }
}

/// Attach a score and breakdown to every offer, normalizing over the whole slice.
fn score_all(offers: &mut [Offer]) {
    let min_price = offers.iter().map(|o| o.price).fold(f64::INFINITY, f64::min);
    let max_price = offers.iter().map(|o| o.price).fold(f64::NEG_INFINITY, f64::max);
    let max_distance = offers.iter().map(|o| o.distance_km).fold(0.0, f64::max);

    let price_span = non_zero(max_price - min_price);
    let distance_span = non_zero(max_distance);

    for offer in offers.iter_mut() {
        let breakdown = ScoreBreakdown {
            price_norm: (offer.price - min_price) / price_span,
            distance_norm: offer.distance_km / distance_span,
            availability_norm: (f64::from(offer.availability) / FULL_STOCK).clamp(0.0, 1.0),
            rating_norm: 1.0 - offer.rating / MAX_RATING,
        };
        offer.score = Some(breakdown.weighted_score());
        offer.score_breakdown = Some(breakdown);
    }
}

/// Divisor guard: a zero span divides by one instead.
fn non_zero(span: f64) -> f64 {
    if span == 0.0 {
        1.0
    } else {
        span
    }
}

/// Stable sort by the chosen key.
fn sort_offers(offers: &mut [Offer], sort_by: SortKey) {
    match sort_by {
        SortKey::Price => offers.sort_by(|a, b| compare(a.price, b.price)),
        SortKey::Distance => offers.sort_by(|a, b| compare(a.distance_km, b.distance_km)),
        SortKey::Rating => offers.sort_by(|a, b| compare(b.rating, a.rating)),
        SortKey::Score => offers.sort_by(|a, b| {
            compare(a.score.unwrap_or(f64::MAX), b.score.unwrap_or(f64::MAX))
        }),
    }
}

fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
