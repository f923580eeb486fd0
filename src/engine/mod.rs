//! Synthesis engines and the parameter math they share.
//!
//! Both engines are driven by the same pitch and depth computation: the pitch
//! knob sets a base frequency between 32 Hz and 543 Hz, the V/oct input
//! multiplies it by up to five octaves through [`LUT_VOCT`], and the depth
//! knob and CV are summed into a level that never reaches 1.0.

pub mod fm_engine;
pub mod wavetable_engine;

use crate::fixed::{SFix, UFix};
use crate::resources::voct::{LUT_VOCT, LUT_VOCT_SIZE};
use crate::utils::clip_output;
use crate::Sample;

/// Oscillator frequency in Hz.
pub type Frequency = UFix<16, 16>;

/// Pitch knob frequency before V/oct scaling, in Hz.
pub type BaseFrequency = UFix<10, 0>;

/// Multiplier read from [`LUT_VOCT`], from 1.0 to 32.0.
pub type VOctFactor = UFix<6, 16>;

/// Output level in wavetable mode, modulation depth in FM mode.
pub type Depth = UFix<0, 10>;

/// Phase offset in cycles, as consumed by
/// [`TableOscillator::phase_mod`](crate::oscillator::table_oscillator::TableOscillator::phase_mod).
pub type PhaseModulation = SFix<15, 16>;

/// Both engines produce samples in this format before they are emitted.
/// It spans the 8-bit table range with 6 extra bits of resolution.
pub type OutputFix = SFix<7, 6>;

/// Lowest frequency of the pitch knob.
pub const BASE_FREQUENCY_MIN: u32 = 32;

/// ⌊0.99 · 1024⌋, the largest depth in raw `UFix<0,10>` units.
pub const MAX_DEPTH_RAW: u32 = 1013;

pub trait Engine {
    type Parameters;

    fn init(&mut self);

    /// Points the oscillator units at a new frequency and parameter set.
    /// Phases are left untouched.
    fn retune(&mut self, frequency: Frequency, parameters: &Self::Parameters);

    /// Renders one output sample.
    fn render(&mut self, depth: Depth, parameters: &Self::Parameters) -> Sample;
}

/// `32 + (pitch_knob >> 1)`.
#[inline]
pub fn base_frequency(pitch_knob: u16) -> BaseFrequency {
    BaseFrequency::from_int(BASE_FREQUENCY_MIN + (pitch_knob as u32 >> 1))
}

#[inline]
pub fn voct_factor(voct: u16) -> VOctFactor {
    VOctFactor::from_raw(LUT_VOCT[(voct as usize).min(LUT_VOCT_SIZE - 1)])
}

#[inline]
pub fn pitch_to_frequency(pitch_knob: u16, voct: u16) -> Frequency {
    base_frequency(pitch_knob).mul(voct_factor(voct))
}

/// Knob and CV read as fractions in `[0, 1)`, summed and capped at 0.99.
#[inline]
pub fn depth(knob: u16, cv: u16) -> Depth {
    let sum = knob as u32 + cv as u32;
    Depth::from_raw(sum.min(MAX_DEPTH_RAW))
}

#[inline]
pub(crate) fn emit(sample: OutputFix) -> Sample {
    clip_output(sample.raw()) as Sample
}
