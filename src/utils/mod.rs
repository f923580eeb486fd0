//! Utility functions.

pub mod random;

use crate::OUTPUT_BITS;

/// Largest sample magnitude the output stage can carry.
pub const OUTPUT_MAX: i32 = (1 << (OUTPUT_BITS - 1)) - 1;

#[inline]
pub fn clip_output(x: i32) -> i32 {
    x.clamp(-OUTPUT_MAX - 1, OUTPUT_MAX)
}

#[inline]
pub fn crossfade(a: f32, b: f32, fade: f32) -> f32 {
    a + (b - a) * fade
}
