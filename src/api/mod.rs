//! Network-facing helpers for the card's external resources.

pub mod lyrics;

pub use lyrics::*;
