//! Sample dataset: a small Bengaluru simulation used by tests and demos.

use super::Dataset;
use crate::models::{Inventory, Medicine, Pharmacy, StockLevel};

impl Dataset {
    /// The built-in sample: ten medicines, ten pharmacies and their stock.
    pub fn sample() -> Self {
        Self::new(sample_medicines(), sample_pharmacies(), sample_inventory())
    }
}

#[allow(clippy::too_many_arguments)]
fn medicine(
    id: u32,
    brand: &str,
    generic: &str,
    strength: &str,
    form: &str,
    usage: &str,
    side_effects: &str,
    substitutes: &[u32],
) -> Medicine {
    Medicine {
        id,
        brand: brand.into(),
        generic: generic.into(),
        strength: strength.into(),
        form: form.into(),
        usage: usage.into(),
        side_effects: side_effects.into(),
        substitutes: substitutes.to_vec(),
    }
}

#[allow(clippy::too_many_arguments)]
fn pharmacy(
    id: u32,
    name: &str,
    lat: f64,
    lon: f64,
    address: &str,
    open_24h: bool,
    rating: f64,
    services: &[&str],
) -> Pharmacy {
    Pharmacy {
        id,
        name: name.into(),
        lat,
        lon,
        address: address.into(),
        open_24h,
        rating,
        services: services.iter().map(|s| s.to_string()).collect(),
    }
}

#[rustfmt::skip]
fn sample_medicines() -> Vec<Medicine> {
    vec![
        medicine(1, "Dolo", "Paracetamol", "650 mg", "tablet", "Fever & mild pain", "Nausea, rash (rare)", &[3, 4]),
        medicine(2, "Crocin", "Paracetamol", "500 mg", "tablet", "Fever & mild pain", "Nausea", &[1, 4]),
        medicine(3, "Azithral", "Azithromycin", "500 mg", "tablet", "Bacterial infections", "GI upset", &[5]),
        medicine(4, "Zithrox", "Azithromycin", "250 mg", "tablet", "Bacterial infections", "GI upset", &[3]),
        medicine(5, "Allegra", "Fexofenadine", "120 mg", "tablet", "Allergy relief", "Drowsiness (rare)", &[]),
        medicine(6, "Augmentin", "Amoxicillin+Clavulanic Acid", "625 mg", "tablet", "Bacterial infections", "GI upset", &[]),
        medicine(7, "Cetirizine", "Cetirizine Hydrochloride", "10 mg", "tablet", "Allergy and cold", "Drowsiness", &[5]),
        medicine(8, "Pantocid", "Pantoprazole", "40 mg", "tablet", "Acidity, reflux", "Headache, nausea", &[]),
        medicine(9, "Shelcal", "Calcium + Vitamin D3", "500 mg", "tablet", "Bone strength", "Constipation (rare)", &[]),
        medicine(10, "Metformin", "Metformin Hydrochloride", "500 mg", "tablet", "Type 2 Diabetes", "GI discomfort", &[]),
    ]
}

#[rustfmt::skip]
fn sample_pharmacies() -> Vec<Pharmacy> {
    vec![
        pharmacy(1, "City Medico", 12.9716, 77.5946, "MG Road", false, 4.4, &["Delivery", "Card"]),
        pharmacy(2, "Green Cross", 12.9352, 77.6245, "HSR Layout", true, 4.6, &["Delivery"]),
        pharmacy(3, "CarePlus Pharmacy", 12.9279, 77.6271, "Koramangala", false, 4.1, &[]),
        pharmacy(4, "HealthKart Meds", 12.9833, 77.605, "Shivajinagar", true, 4.7, &["Delivery", "Card"]),
        pharmacy(5, "WellCare Hub", 12.958, 77.638, "Indiranagar", false, 4.3, &["Card"]),
        pharmacy(6, "Apollo Express", 12.99, 77.7, "Whitefield", true, 4.5, &["Delivery"]),
        pharmacy(7, "Rx Point", 12.9, 77.58, "BTM", false, 4.0, &[]),
        pharmacy(8, "Night Owl Pharmacy", 12.955, 77.59, "Richmond Town", true, 4.2, &["Delivery"]),
        pharmacy(9, "Guardian Meds", 12.98, 77.62, "Ulsoor", false, 4.1, &[]),
        pharmacy(10, "Medico 24x7", 12.975, 77.64, "CMH Road", true, 4.8, &["Delivery", "Card"]),
    ]
}

/// (pharmacy id, medicine id, price, stock)
const SAMPLE_STOCK: &[(u32, u32, f64, i32)] = &[
    (1, 1, 35.0, 90),
    (1, 3, 180.0, 70),
    (2, 1, 33.0, 50),
    (2, 4, 28.0, 60),
    (3, 1, 34.0, 30),
    (3, 2, 95.0, 60),
    (4, 1, 36.0, 85),
    (4, 5, 120.0, 50),
    (5, 3, 176.0, 25),
    (5, 6, 210.0, 20),
    (6, 1, 38.0, 40),
    (6, 2, 92.0, 40),
    (6, 5, 118.0, 45),
    (7, 1, 32.0, 18),
    (8, 4, 30.0, 55),
    (8, 1, 37.0, 65),
    (9, 2, 88.0, 35),
    (9, 5, 125.0, 42),
    (10, 1, 31.0, 95),
    (10, 3, 178.0, 65),
];

fn sample_inventory() -> Inventory {
    let mut inventory = Inventory::new();
    for &(pharmacy_id, medicine_id, price, stock) in SAMPLE_STOCK {
        inventory.insert(pharmacy_id, medicine_id, StockLevel { price, stock });
    }
    inventory
}
