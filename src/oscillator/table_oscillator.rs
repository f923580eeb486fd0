//! Phase-accumulator oscillator reading a signed 8-bit single-cycle table.
//!
//! The phase is a `u32` holding the table position with
//! [`PHASE_FRACTIONAL_BITS`] fractional bits. It wraps naturally and is masked
//! to the table size on every read, so a unit keeps running forever without
//! any reset. Re-targeting the table or the frequency never touches the
//! phase.
//!
//! With the `dither-phase` feature each plain read is offset by up to half a
//! cell in either direction, drawn from the unit's own generator.
//! Phase-modulated reads are never dithered.

use crate::engine::{Frequency, PhaseModulation};
use crate::utils::random::Random;
use crate::AUDIO_RATE;

pub const PHASE_FRACTIONAL_BITS: u32 = 16;

#[derive(Debug, Clone)]
pub struct TableOscillator<const CELLS: usize> {
    table: &'static [i8; CELLS],
    phase: u32,
    increment: u32,

    #[cfg_attr(not(feature = "dither-phase"), allow(dead_code))]
    dither: Random,
}

impl<const CELLS: usize> TableOscillator<CELLS> {
    const INDEX_MASK: usize = {
        assert!(CELLS.is_power_of_two(), "table size must be a power of two");
        CELLS - 1
    };

    pub fn new(table: &'static [i8; CELLS]) -> Self {
        Self {
            table,
            phase: 0,
            increment: 0,
            dither: Random::default(),
        }
    }

    pub fn init(&mut self) {
        self.reset();
        self.increment = 0;
    }

    #[inline]
    pub fn reset(&mut self) {
        self.phase = 0;
        self.dither = Random::default();
    }

    #[inline]
    pub fn set_table(&mut self, table: &'static [i8; CELLS]) {
        self.table = table;
    }

    #[inline]
    pub fn table(&self) -> &'static [i8; CELLS] {
        self.table
    }

    /// Sets the frequency in Hz. Increments beyond the accumulator range
    /// saturate.
    #[inline]
    pub fn set_frequency(&mut self, frequency: Frequency) {
        let increment = frequency.raw() as u64 * CELLS as u64 / AUDIO_RATE as u64;
        self.increment = increment.min(u32::MAX as u64) as u32;
    }

    #[inline]
    pub fn increment(&self) -> u32 {
        self.increment
    }

    #[inline]
    pub fn phase(&self) -> u32 {
        self.phase
    }

    /// Advances the phase by one sample and reads the table.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> i8 {
        self.phase = self.phase.wrapping_add(self.increment);
        self.read(self.phase)
    }

    /// Advances the phase by one sample and reads the table at an offset of
    /// `amount` cycles from it.
    #[inline]
    pub fn phase_mod(&mut self, amount: PhaseModulation) -> i8 {
        self.phase = self.phase.wrapping_add(self.increment);
        let offset = (amount.raw() as i64 * CELLS as i64) as u32;
        self.lookup(self.phase.wrapping_add(offset))
    }

    #[inline]
    fn read(&mut self, phase: u32) -> i8 {
        #[cfg(feature = "dither-phase")]
        let phase = phase.wrapping_add(self.dither.get_sample() as i32 as u32);

        self.lookup(phase)
    }

    #[inline]
    fn lookup(&self, phase: u32) -> i8 {
        self.table[(phase >> PHASE_FRACTIONAL_BITS) as usize & Self::INDEX_MASK]
    }
}
