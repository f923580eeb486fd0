//! Oscillator units.

pub mod table_oscillator;
