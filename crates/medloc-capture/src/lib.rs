//! Query capture from external recognizers.
//!
//! Image text recognition and speech-to-text run outside this crate. This
//! crate only turns what they hand back into a medicine query string.

pub mod recent;
pub mod recognition;

pub use recent::*;
pub use recognition::*;
