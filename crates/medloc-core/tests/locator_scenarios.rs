//! Golden scenarios over the sample dataset.
//!
//! Expected orderings were worked out by hand with the haversine distances
//! from each user position.

use medloc_core::models::{SearchFilters, SearchRequest, SortKey};
use medloc_core::{Dataset, GeoPoint, Locator, SearchOutcome};

const MG_ROAD: GeoPoint = GeoPoint::new(12.9716, 77.5946);
const INDIRANAGAR: GeoPoint = GeoPoint::new(12.9580, 77.6380);

/// A search scenario with its expected pharmacy order.
struct Scenario {
    id: &'static str,
    query: &'static str,
    position: GeoPoint,
    radius_km: f64,
    price_cap: f64,
    open_now_only: bool,
    sort_by: SortKey,
    expected_medicine: Option<u32>,
    expected_pharmacies: &'static [u32],
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "dolo-by-price",
            query: "Dolo 650 tablet",
            position: MG_ROAD,
            radius_km: 8.0,
            price_cap: 250.0,
            open_now_only: false,
            sort_by: SortKey::Price,
            expected_medicine: Some(1),
            // Apollo Express (11.6 km) and Rx Point (8.12 km) fall outside 8 km
            expected_pharmacies: &[10, 2, 3, 1, 4, 8],
        },
        Scenario {
            id: "dolo-by-score",
            query: "Dolo 650 tablet",
            position: MG_ROAD,
            radius_km: 8.0,
            price_cap: 250.0,
            open_now_only: false,
            sort_by: SortKey::Score,
            expected_medicine: Some(1),
            expected_pharmacies: &[10, 1, 4, 2, 8, 3],
        },
        Scenario {
            id: "dolo-wide-radius-by-score",
            query: "Dolo 650 tablet",
            position: MG_ROAD,
            radius_km: 25.0,
            price_cap: 250.0,
            open_now_only: false,
            sort_by: SortKey::Score,
            expected_medicine: Some(1),
            expected_pharmacies: &[10, 1, 2, 4, 7, 8, 3, 6],
        },
        Scenario {
            id: "dolo-wide-radius-by-price",
            query: "Dolo 650 tablet",
            position: MG_ROAD,
            radius_km: 25.0,
            price_cap: 250.0,
            open_now_only: false,
            sort_by: SortKey::Price,
            expected_medicine: Some(1),
            expected_pharmacies: &[10, 7, 2, 3, 1, 4, 8, 6],
        },
        Scenario {
            id: "dolo-wide-radius-by-rating",
            query: "Dolo 650 tablet",
            position: MG_ROAD,
            radius_km: 25.0,
            price_cap: 250.0,
            open_now_only: false,
            sort_by: SortKey::Rating,
            expected_medicine: Some(1),
            expected_pharmacies: &[10, 4, 2, 6, 1, 8, 3, 7],
        },
        Scenario {
            id: "dolo-price-cap-30",
            query: "Dolo 650 tablet",
            position: MG_ROAD,
            radius_km: 8.0,
            price_cap: 30.0,
            open_now_only: false,
            sort_by: SortKey::Price,
            expected_medicine: Some(1),
            expected_pharmacies: &[],
        },
        Scenario {
            id: "dolo-price-cap-34-by-distance",
            query: "Dolo 650 tablet",
            position: MG_ROAD,
            radius_km: 8.0,
            price_cap: 34.0,
            open_now_only: false,
            sort_by: SortKey::Distance,
            expected_medicine: Some(1),
            expected_pharmacies: &[10, 2, 3],
        },
        Scenario {
            id: "allegra-indiranagar",
            query: "Allegra",
            position: INDIRANAGAR,
            radius_km: 5.0,
            price_cap: 250.0,
            open_now_only: false,
            sort_by: SortKey::Score,
            expected_medicine: Some(5),
            // Apollo Express is 7.6 km away
            expected_pharmacies: &[4, 9],
        },
        Scenario {
            id: "dolo-open-now",
            query: "Dolo",
            position: MG_ROAD,
            radius_km: 8.0,
            price_cap: 250.0,
            open_now_only: true,
            sort_by: SortKey::Score,
            expected_medicine: Some(1),
            expected_pharmacies: &[10, 4, 2, 8],
        },
        Scenario {
            id: "paracetamol-generic",
            query: "Paracetamol 650 tablet",
            position: MG_ROAD,
            radius_km: 8.0,
            price_cap: 250.0,
            open_now_only: false,
            sort_by: SortKey::Score,
            expected_medicine: Some(1),
            expected_pharmacies: &[10, 1, 4, 2, 8, 3],
        },
        Scenario {
            id: "no-match",
            query: "xyz-nonexistent",
            position: MG_ROAD,
            radius_km: 25.0,
            price_cap: 400.0,
            open_now_only: false,
            sort_by: SortKey::Score,
            expected_medicine: None,
            expected_pharmacies: &[],
        },
        Scenario {
            id: "zero-radius",
            query: "Allegra",
            position: MG_ROAD,
            radius_km: 0.0,
            price_cap: 400.0,
            open_now_only: false,
            sort_by: SortKey::Score,
            expected_medicine: Some(5),
            expected_pharmacies: &[],
        },
        Scenario {
            id: "zero-radius-on-pharmacy",
            query: "Dolo",
            position: MG_ROAD,
            radius_km: 0.0,
            price_cap: 400.0,
            open_now_only: false,
            sort_by: SortKey::Score,
            expected_medicine: Some(1),
            // City Medico sits exactly on the user
            expected_pharmacies: &[1],
        },
    ]
}

fn run(dataset: &Dataset, scenario: &Scenario) -> SearchOutcome {
    let request = SearchRequest::new(scenario.query, Some(scenario.position)).with_filters(
        SearchFilters {
            radius_km: scenario.radius_km,
            price_cap: scenario.price_cap,
            open_now_only: scenario.open_now_only,
            sort_by: scenario.sort_by,
        },
    );
    Locator::new(dataset).locate(&request)
}

#[test]
fn test_golden_scenarios() {
    let dataset = Dataset::sample();

    for scenario in scenarios() {
        let outcome = run(&dataset, &scenario);

        assert_eq!(
            outcome.medicine.as_ref().map(|m| m.id),
            scenario.expected_medicine,
            "Scenario '{}': wrong medicine",
            scenario.id
        );

        let ids: Vec<u32> = outcome.ranked.offers.iter().map(|o| o.pharmacy_id).collect();
        assert_eq!(
            ids, scenario.expected_pharmacies,
            "Scenario '{}': wrong pharmacy order",
            scenario.id
        );

        assert_eq!(
            outcome.ranked.best().map(|o| o.pharmacy_id),
            scenario.expected_pharmacies.first().copied(),
            "Scenario '{}': best must be the head of the list",
            scenario.id
        );
    }
}

#[test]
fn test_dolo_scores() {
    let dataset = Dataset::sample();
    let scenarios = scenarios();
    let outcome = run(&dataset, &scenarios[1]);

    let scores: Vec<f64> = outcome
        .ranked
        .offers
        .iter()
        .map(|o| o.score.unwrap())
        .collect();
    let expected = [0.261, 0.299, 0.455, 0.5, 0.582, 0.658];

    for (got, want) in scores.iter().zip(expected.iter()) {
        assert!(
            (got - want).abs() < 1e-9,
            "expected score {}, got {}",
            want,
            got
        );
    }
}

#[test]
fn test_open_now_excludes_part_time_pharmacies() {
    let dataset = Dataset::sample();
    let request = SearchRequest::new("Dolo", Some(MG_ROAD)).with_filters(SearchFilters {
        radius_km: 25.0,
        open_now_only: true,
        ..SearchFilters::default()
    });
    let outcome = Locator::new(&dataset).locate(&request);

    assert!(!outcome.ranked.is_empty());
    for offer in &outcome.ranked.offers {
        assert!(![1, 3, 7].contains(&offer.pharmacy_id));
        assert!(offer.open_24h);
    }
}

#[test]
fn test_identical_prices_fall_through_to_other_terms() {
    let mut dataset = Dataset::sample();
    // Flatten every Dolo price to 40
    let flat: Vec<(u32, u32)> = dataset
        .inventory
        .iter()
        .filter(|&(_, medicine_id, _)| medicine_id == 1)
        .map(|(pharmacy_id, medicine_id, _)| (pharmacy_id, medicine_id))
        .collect();
    for (pharmacy_id, medicine_id) in flat {
        let stock = dataset.inventory.get(pharmacy_id, medicine_id).unwrap().stock;
        dataset.inventory.insert(
            pharmacy_id,
            medicine_id,
            medloc_core::StockLevel { price: 40.0, stock },
        );
    }

    let request = SearchRequest::new("Dolo", Some(MG_ROAD));
    let outcome = Locator::new(&dataset).locate(&request);

    assert!(!outcome.ranked.is_empty());
    for offer in &outcome.ranked.offers {
        assert_eq!(offer.score_breakdown.unwrap().price_norm, 0.0);
    }
    // City Medico: on the spot, 90% stock
    assert_eq!(outcome.ranked.best().unwrap().pharmacy_id, 1);
}

#[test]
fn test_repeated_search_is_identical() {
    let dataset = Dataset::sample();
    let locator = Locator::new(&dataset);
    let request = SearchRequest::new("Dolo 650 tablet", Some(MG_ROAD));

    assert_eq!(locator.locate(&request), locator.locate(&request));
}
