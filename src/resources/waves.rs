//! Bank of 16 morphing single-cycle waveforms.
//!
//! The bank sweeps noise -> sine -> triangle -> saw -> square. Anchor shapes
//! sit on tables 0, 4, 8, 12 and 15, the tables between them are linear
//! blends of their two neighbours. Triangle, saw and square are built from a
//! limited number of partials to keep aliasing down at the top of the pitch
//! range.
//!
//! The bank is computed once, on first use, and is immutable afterwards.

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

use crate::utils::crossfade;
use crate::utils::random::Random;

pub const WAVE_SIZE: usize = 1024;
pub const NUM_WAVES: usize = 16;

pub type Wave = [i8; WAVE_SIZE];

const NUM_PARTIALS: usize = 24;
const NOISE_SEED: u32 = 0x5eed;

// Headroom for the Gibbs overshoot of the additive shapes.
const SHAPE_GAIN: f32 = 0.9;

static WAVES: Once<[Wave; NUM_WAVES]> = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Noise,
    Sine,
    Triangle,
    Saw,
    Square,
}

const ANCHORS: [(usize, Shape); 5] = [
    (0, Shape::Noise),
    (4, Shape::Sine),
    (8, Shape::Triangle),
    (12, Shape::Saw),
    (15, Shape::Square),
];

/// Returns the wavetable bank, building it on the first call.
pub fn waves() -> &'static [Wave; NUM_WAVES] {
    WAVES.call_once(build_waves)
}

/// Returns one table of the bank. The index is clamped into range.
#[inline]
pub fn wave(index: usize) -> &'static Wave {
    &waves()[index.min(NUM_WAVES - 1)]
}

fn build_waves() -> [Wave; NUM_WAVES] {
    let mut noise = [0.0f32; WAVE_SIZE];
    let mut random = Random::new(NOISE_SEED);
    for sample in noise.iter_mut() {
        *sample = random.get_float() * 2.0 - 1.0;
    }

    let mut waves = [[0i8; WAVE_SIZE]; NUM_WAVES];

    for (index, wave) in waves.iter_mut().enumerate() {
        let segment = ANCHORS
            .windows(2)
            .find(|pair| index <= pair[1].0)
            .unwrap_or(&ANCHORS[ANCHORS.len() - 2..]);
        let (start, from) = segment[0];
        let (end, to) = segment[1];
        let fade = (index - start) as f32 / (end - start) as f32;

        for (i, sample) in wave.iter_mut().enumerate() {
            let phase = i as f32 / WAVE_SIZE as f32;
            let a = shape_value(from, phase, noise[i]);
            let b = shape_value(to, phase, noise[i]);
            *sample = quantize(crossfade(a, b, fade));
        }
    }

    waves
}

fn shape_value(shape: Shape, phase: f32, noise: f32) -> f32 {
    let two_pi_phase = 2.0 * core::f32::consts::PI * phase;

    match shape {
        Shape::Noise => noise,
        Shape::Sine => two_pi_phase.sin(),
        Shape::Triangle => {
            let mut sum = 0.0;
            for k in (1..=NUM_PARTIALS).step_by(2) {
                let sign = if (k / 2) % 2 == 0 { 1.0 } else { -1.0 };
                sum += sign * (k as f32 * two_pi_phase).sin() / (k * k) as f32;
            }
            sum * 8.0 / (core::f32::consts::PI * core::f32::consts::PI)
        }
        Shape::Saw => {
            let mut sum = 0.0;
            for k in 1..=NUM_PARTIALS {
                sum += (k as f32 * two_pi_phase).sin() / k as f32;
            }
            sum * 2.0 / core::f32::consts::PI * SHAPE_GAIN
        }
        Shape::Square => {
            let mut sum = 0.0;
            for k in (1..=NUM_PARTIALS).step_by(2) {
                sum += (k as f32 * two_pi_phase).sin() / k as f32;
            }
            sum * 4.0 / core::f32::consts::PI * SHAPE_GAIN
        }
    }
}

#[inline]
fn quantize(x: f32) -> i8 {
    (x * 127.0).round().clamp(-127.0, 127.0) as i8
}
