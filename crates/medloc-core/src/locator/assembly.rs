//! Joins a medicine with pharmacies and inventory into raw offers.

use crate::geo::{distance_km, round_to, GeoPoint};
use crate::models::{Inventory, Medicine, Offer, Pharmacy};

/// Decimal places kept on offer distances.
pub const DISTANCE_PLACES: i32 = 2;

/// Build one unscored offer per pharmacy that carries the medicine.
///
/// Pharmacies without an inventory entry are skipped. Offers keep pharmacy
/// order. No filtering happens here. A missing medicine or position gives an
/// empty list.
pub fn assemble_offers(
    medicine: Option<&Medicine>,
    pharmacies: &[Pharmacy],
    inventory: &Inventory,
    position: Option<GeoPoint>,
) -> Vec<Offer> {
    let (Some(medicine), Some(position)) = (medicine, position) else {
        return Vec::new();
    };

    pharmacies
        .iter()
        .filter_map(|pharmacy| {
            let level = inventory.get(pharmacy.id, medicine.id)?;
            let distance = round_to(distance_km(position, pharmacy.position()), DISTANCE_PLACES);
            Some(Offer::new(pharmacy, level, distance))
        })
        .collect()
}
