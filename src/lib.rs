#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod engine;
pub mod fixed;
pub mod hardware;
pub mod oscillator;
pub mod resources;
pub mod scheduler;
pub mod utils;
pub mod voice;

/// Audio sample rate in Hz.
pub const AUDIO_RATE: u32 = 32768;

/// Control rate in Hz.
pub const CONTROL_RATE: u32 = 512;

/// Audio ticks per control tick.
pub const CONTROL_PERIOD: usize = (AUDIO_RATE / CONTROL_RATE) as usize;

/// Resolution of the output samples, sign included.
pub const OUTPUT_BITS: u32 = 14;

/// Mono output sample, signed, [`OUTPUT_BITS`] wide.
pub type Sample = i16;

/// Normalizes an output sample to `[-1.0, 1.0)`.
#[inline]
pub fn sample_to_f32(sample: Sample) -> f32 {
    sample as f32 / (1 << (OUTPUT_BITS - 1)) as f32
}
