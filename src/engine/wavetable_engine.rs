//! Wavetable morphing oscillator.
//!
//! Two oscillator units run at the same frequency on neighbouring tables of
//! the 16-wave bank and are crossfaded.
//!
//! Engine parameters:
//! - *KNOB 2 + CV 1:* position in the bank. The sum is read as a `UFix<4,6>`
//!   whose integer part picks the tables and whose fraction sets the blend.
//! - *KNOB 3 + CV 2:* output level.
//!
//! Unit A plays the table one below the integer position (clamped at 0),
//! unit B the table at the integer position. Unit B's gain is the fractional
//! part, so the blend jumps by one table each time the position crosses an
//! integer.

use super::{emit, Depth, Engine, Frequency};
use crate::fixed::{SFix, UFix};
use crate::oscillator::table_oscillator::TableOscillator;
use crate::resources::waves::{wave, NUM_WAVES, WAVE_SIZE};
use crate::Sample;

/// Position in the wavetable bank, `[0, 15.984375]`.
pub type WavePosition = UFix<4, 6>;

/// Crossfade gain. One integer bit keeps a gain of exactly 1.0 representable.
pub type Gain = UFix<1, 8>;

/// Sum of both gain-weighted table samples.
type Mix = SFix<7, 8>;

/// Mix scaled by the depth.
type Scaled = SFix<7, 18>;

const POSITION_MAX_RAW: u32 = WavePosition::MAX_RAW;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavetableParameters {
    pub position: WavePosition,
    pub lower: usize,
    pub upper: usize,
    pub gain_a: Gain,
    pub gain_b: Gain,
}

impl Default for WavetableParameters {
    fn default() -> Self {
        Self::from_position(WavePosition::from_raw(0))
    }
}

impl WavetableParameters {
    /// Sums knob and CV, clamped to the 10-bit range.
    #[inline]
    pub fn from_inputs(knob: u16, cv: u16) -> Self {
        let sum = (knob as u32 + cv as u32).min(POSITION_MAX_RAW);
        Self::from_position(WavePosition::from_raw(sum))
    }

    #[inline]
    pub fn from_position(position: WavePosition) -> Self {
        let integral = position.int_part() as usize;
        let upper = integral.min(NUM_WAVES - 1);
        let lower = integral.saturating_sub(1).min(NUM_WAVES - 1);

        let gain_b: Gain = UFix::<0, 6>::from_raw(position.frac_raw()).convert();
        let gain_a = Gain::from_int(1) - gain_b;

        Self {
            position,
            lower,
            upper,
            gain_a,
            gain_b,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WavetableEngine {
    wave_a: TableOscillator<WAVE_SIZE>,
    wave_b: TableOscillator<WAVE_SIZE>,
}

impl Default for WavetableEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WavetableEngine {
    pub fn new() -> Self {
        Self {
            wave_a: TableOscillator::new(wave(0)),
            wave_b: TableOscillator::new(wave(1)),
        }
    }

    /// Tables currently bound to unit A and unit B.
    pub fn tables(&self) -> (&'static [i8; WAVE_SIZE], &'static [i8; WAVE_SIZE]) {
        (self.wave_a.table(), self.wave_b.table())
    }
}

impl Engine for WavetableEngine {
    type Parameters = WavetableParameters;

    fn init(&mut self) {
        self.wave_a.init();
        self.wave_b.init();
        self.wave_a.set_table(wave(0));
        self.wave_b.set_table(wave(1));
    }

    #[inline]
    fn retune(&mut self, frequency: Frequency, parameters: &WavetableParameters) {
        self.wave_a.set_table(wave(parameters.lower));
        self.wave_b.set_table(wave(parameters.upper));
        self.wave_a.set_frequency(frequency);
        self.wave_b.set_frequency(frequency);
    }

    #[inline]
    fn render(&mut self, depth: Depth, parameters: &WavetableParameters) -> Sample {
        let a = SFix::<7, 0>::from_raw(self.wave_a.next() as i32);
        let b = SFix::<7, 0>::from_raw(self.wave_b.next() as i32);

        let weighted_a: Mix = a.mul_unsigned(parameters.gain_a);
        let weighted_b: Mix = b.mul_unsigned(parameters.gain_b);
        let mix = weighted_a + weighted_b;
        let scaled: Scaled = mix.mul_unsigned(depth);

        emit(scaled.convert::<7, 6>())
    }
}
