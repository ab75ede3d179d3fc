//! Domain models for the medicine locator.

mod medicine;
mod offer;
mod pharmacy;
mod search;

pub use medicine::*;
pub use offer::*;
pub use pharmacy::*;
pub use search::*;
