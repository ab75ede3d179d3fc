//! Search request models and presentation defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Position used when the device cannot or will not report one (MG Road, Bengaluru).
pub const FALLBACK_POSITION: GeoPoint = GeoPoint::new(12.9716, 77.5946);

/// Default search radius in km.
pub const DEFAULT_RADIUS_KM: f64 = 8.0;

/// Default price cap in the local currency unit.
pub const DEFAULT_PRICE_CAP: f64 = 250.0;

/// Ordering applied to ranked offers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortKey {
    /// Composite score ascending
    #[default]
    Score,
    /// Price ascending
    Price,
    /// Distance ascending
    Distance,
    /// Rating descending
    Rating,
}

impl SortKey {
    /// Parse a sort key. Unrecognized keys fall back to [`SortKey::Score`].
    pub fn parse(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "price" => SortKey::Price,
            "distance" => SortKey::Distance,
            "rating" => SortKey::Rating,
            _ => SortKey::Score,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Score => "score",
            SortKey::Price => "price",
            SortKey::Distance => "distance",
            SortKey::Rating => "rating",
        }
    }
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        SortKey::parse(key)
    }
}

impl From<String> for SortKey {
    fn from(key: String) -> Self {
        SortKey::parse(&key)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter and sort preferences chosen by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchFilters {
    /// Maximum distance from the user, inclusive
    pub radius_km: f64,
    /// Maximum price, inclusive
    pub price_cap: f64,
    /// Keep only pharmacies open 24 hours
    pub open_now_only: bool,
    pub sort_by: SortKey,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
            price_cap: DEFAULT_PRICE_CAP,
            open_now_only: false,
            sort_by: SortKey::Score,
        }
    }
}

/// Everything the presentation layer hands over for one search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchRequest {
    /// Free text typed, photographed or spoken by the user
    pub query: String,
    /// Device position, if known
    pub position: Option<GeoPoint>,
    pub filters: SearchFilters,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, position: Option<GeoPoint>) -> Self {
        Self {
            query: query.into(),
            position,
            filters: SearchFilters::default(),
        }
    }

    /// Replace the filters.
    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Fill in [`FALLBACK_POSITION`] when the device position is missing.
    ///
    /// Callers apply this explicitly after geolocation is denied; the
    /// locator never guesses a position on its own.
    pub fn position_or_fallback(mut self) -> Self {
        self.position.get_or_insert(FALLBACK_POSITION);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("price"), SortKey::Price);
        assert_eq!(SortKey::parse("Distance"), SortKey::Distance);
        assert_eq!(SortKey::parse(" rating "), SortKey::Rating);
        assert_eq!(SortKey::parse("score"), SortKey::Score);
        assert_eq!(SortKey::parse("ai"), SortKey::Score);
        assert_eq!(SortKey::parse(""), SortKey::Score);
    }

    #[test]
    fn test_sort_key_serde() {
        assert_eq!(serde_json::to_string(&SortKey::Rating).unwrap(), "\"rating\"");
        let key: SortKey = serde_json::from_str("\"distance\"").unwrap();
        assert_eq!(key, SortKey::Distance);
    }

    #[test]
    fn test_sort_key_deserialize_is_total() {
        let key: SortKey = serde_json::from_str("\"Price\"").unwrap();
        assert_eq!(key, SortKey::Price);
        let key: SortKey = serde_json::from_str("\"ai\"").unwrap();
        assert_eq!(key, SortKey::Score);
    }

    #[test]
    fn test_filter_defaults() {
        let filters = SearchFilters::default();
        assert_eq!(filters.radius_km, 8.0);
        assert_eq!(filters.price_cap, 250.0);
        assert!(!filters.open_now_only);
        assert_eq!(filters.sort_by, SortKey::Score);
    }

    #[test]
    fn test_partial_request_json() {
        let req: SearchRequest =
            serde_json::from_str(r#"{"query": "Dolo 650", "filters": {"sort_by": "price"}}"#)
                .unwrap();
        assert_eq!(req.query, "Dolo 650");
        assert_eq!(req.position, None);
        assert_eq!(req.filters.sort_by, SortKey::Price);
        assert_eq!(req.filters.radius_km, DEFAULT_RADIUS_KM);
    }

    #[test]
    fn test_position_or_fallback() {
        let req = SearchRequest::new("dolo", None).position_or_fallback();
        assert_eq!(req.position, Some(FALLBACK_POSITION));

        let here = GeoPoint::new(12.958, 77.638);
        let req = SearchRequest::new("dolo", Some(here)).position_or_fallback();
        assert_eq!(req.position, Some(here));
    }
}
