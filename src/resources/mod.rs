//! Lookup tables.
//!
//! Everything here is read-only. Indices into these tables are clamped or
//! masked by their users before the lookup.

pub mod cosine;
pub mod ratio;
pub mod voct;
pub mod waves;
