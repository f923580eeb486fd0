//! Two operator FM.
//!
//! A cosine modulator offsets the phase of a cosine carrier.
//!
//! Engine parameters:
//! - *KNOB 2:* modulator to carrier ratio, through a response curve with flat
//!   zones on whole-number ratios.
//! - *CV 1:* linear ratio offset, up to +7.99.
//! - *KNOB 3 + CV 2:* modulation depth.
//!
//! The deviation is derived from the modulator frequency and the depth once
//! per control tick. It scales the modulator output into a phase offset, in
//! cycles, that is added to the carrier's phase on every sample.

use super::{emit, Depth, Engine, Frequency, PhaseModulation};
use crate::fixed::{SFix, UFix};
use crate::oscillator::table_oscillator::TableOscillator;
use crate::resources::cosine::{LUT_COSINE, LUT_COSINE_SIZE};
use crate::resources::ratio::{LUT_FM_RATIO, LUT_FM_RATIO_SIZE};
use crate::Sample;

/// Modulator to carrier frequency ratio, `[0.25, 15.9921875]`.
pub type Ratio = UFix<4, 7>;

/// Knob part of the ratio, as stored in [`LUT_FM_RATIO`].
pub type KnobRatio = UFix<3, 5>;

/// CV part of the ratio: the raw 10-bit read with 7 fractional bits.
pub type CvRatio = UFix<3, 7>;

/// Modulation index scale derived from the modulator frequency and depth.
pub type Deviation = UFix<8, 16>;

/// Modulator output read as a signed fraction.
pub type ModulatorSample = SFix<0, 7>;

/// Smallest ratio, added to both ratio terms.
pub const RATIO_OFFSET: UFix<0, 2> = UFix::from_raw(1);

/// Right shift rescaling `modulator Hz × depth` into the deviation.
pub const DEVIATION_SHIFT: u32 = 8;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FmParameters {
    pub ratio: Ratio,
    pub modulator_frequency: Frequency,
    pub deviation: Deviation,
}

impl FmParameters {
    /// Derives the modulator frequency and the deviation together so that
    /// they always agree with `frequency`, `ratio` and `depth`.
    ///
    /// Modulator frequencies of 65536 Hz and above wrap around, and the
    /// deviation follows the wrapped value.
    #[inline]
    pub fn new(frequency: Frequency, ratio: Ratio, depth: Depth) -> Self {
        let modulator_frequency: Frequency = frequency.wrapping_mul(ratio);
        let whole_hz: UFix<16, 0> = modulator_frequency.convert();
        let scaled: UFix<16, 10> = whole_hz.mul(depth);
        let deviation: Deviation = scaled.shr(DEVIATION_SHIFT);

        Self {
            ratio,
            modulator_frequency,
            deviation,
        }
    }
}

/// Knob curve + CV + offset. The three ranges add up to at most the largest
/// `UFix<4,7>`, so the sum is never clamped.
#[inline]
pub fn ratio(knob: u16, cv: u16) -> Ratio {
    let index = (knob as usize).min(LUT_FM_RATIO_SIZE - 1);
    let knob_ratio = KnobRatio::from_raw(LUT_FM_RATIO[index] as u32);
    let cv_ratio = CvRatio::from_raw(cv as u32);

    knob_ratio.convert::<4, 7>() + cv_ratio.convert::<4, 7>() + RATIO_OFFSET.convert::<4, 7>()
}

#[derive(Debug, Clone)]
pub struct FmEngine {
    carrier: TableOscillator<LUT_COSINE_SIZE>,
    modulator: TableOscillator<LUT_COSINE_SIZE>,
}

impl Default for FmEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FmEngine {
    pub fn new() -> Self {
        Self {
            carrier: TableOscillator::new(&LUT_COSINE),
            modulator: TableOscillator::new(&LUT_COSINE),
        }
    }

    /// Phase increments of the carrier and the modulator.
    pub fn increments(&self) -> (u32, u32) {
        (self.carrier.increment(), self.modulator.increment())
    }
}

impl Engine for FmEngine {
    type Parameters = FmParameters;

    fn init(&mut self) {
        self.carrier.init();
        self.modulator.init();
    }

    #[inline]
    fn retune(&mut self, frequency: Frequency, parameters: &FmParameters) {
        self.carrier.set_frequency(frequency);
        self.modulator.set_frequency(parameters.modulator_frequency);
    }

    #[inline]
    fn render(&mut self, _depth: Depth, parameters: &FmParameters) -> Sample {
        let modulator = ModulatorSample::from_raw(self.modulator.next() as i32);
        let modulation: PhaseModulation = modulator.mul_unsigned(parameters.deviation);
        let carrier = SFix::<7, 0>::from_raw(self.carrier.phase_mod(modulation) as i32);

        emit(carrier.convert())
    }
}
