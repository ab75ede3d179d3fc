//! Catalog lookup by free-text query.
//!
//! Matching is plain case-folded substring containment: a medicine matches
//! when its brand or generic name occurs inside the query. The first match in
//! catalog order wins, so the catalog order is part of the observable result.

use tracing::warn;

use crate::models::Medicine;

/// Find the first catalog entry named in the query.
///
/// Returns `None` for an empty query or when no name occurs in it.
pub fn match_medicine<'a>(query: &str, catalog: &'a [Medicine]) -> Option<&'a Medicine> {
    if query.is_empty() {
        return None;
    }
    let query_lower = query.to_lowercase();
    catalog.iter().find(|med| med.is_named_in(&query_lower))
}

/// Resolve a medicine's substitute ids, in order, skipping ids missing from the catalog.
pub fn substitutes<'a>(medicine: &Medicine, catalog: &'a [Medicine]) -> Vec<&'a Medicine> {
    medicine
        .substitutes
        .iter()
        .filter_map(|&id| {
            let found = catalog.iter().find(|m| m.id == id);
            if found.is_none() {
                warn!(medicine_id = medicine.id, substitute_id = id, "substitute not in catalog");
            }
            found
        })
        .collect()
}
