//! Tests for the oscillator units

mod wav_writer;

use dual_osc_dsp::engine::{Frequency, PhaseModulation};
use dual_osc_dsp::oscillator::table_oscillator::{TableOscillator, PHASE_FRACTIONAL_BITS};
use dual_osc_dsp::resources::cosine::{LUT_COSINE, LUT_COSINE_SIZE};
use dual_osc_dsp::resources::waves::{wave, WAVE_SIZE};
use dual_osc_dsp::{Sample, AUDIO_RATE};

#[test]
fn increment_matches_frequency() {
    let mut osc = TableOscillator::<WAVE_SIZE>::new(wave(4));

    // 32 Hz on a 1024 cell table at 32768 Hz is exactly one cell per sample.
    osc.set_frequency(Frequency::from_int(32));
    assert_eq!(osc.increment(), 1 << PHASE_FRACTIONAL_BITS);

    let mut cosine = TableOscillator::<LUT_COSINE_SIZE>::new(&LUT_COSINE);
    cosine.set_frequency(Frequency::from_int(32));
    assert_eq!(cosine.increment(), 2 << PHASE_FRACTIONAL_BITS);

    osc.set_frequency(Frequency::from_raw(u32::MAX));
    assert!(osc.increment() > 0);
}

#[test]
fn phase_accumulates_and_wraps() {
    let mut osc = TableOscillator::<WAVE_SIZE>::new(wave(4));
    osc.set_frequency(Frequency::from_int(32));

    for _ in 0..100 {
        osc.next();
    }
    assert_eq!(osc.phase(), 100 << PHASE_FRACTIONAL_BITS);

    // One full cycle takes AUDIO_RATE / 32 samples and lands back on cell 0.
    for _ in 100..(AUDIO_RATE as usize / 32) {
        osc.next();
    }
    let cell = (osc.phase() >> PHASE_FRACTIONAL_BITS) as usize & (WAVE_SIZE - 1);
    assert_eq!(cell, 0);
}

#[test]
fn retargeting_keeps_phase() {
    let mut osc = TableOscillator::<WAVE_SIZE>::new(wave(0));
    osc.set_frequency(Frequency::from_int(440));

    for _ in 0..100 {
        osc.next();
    }
    let phase = osc.phase();

    osc.set_table(wave(15));
    osc.set_frequency(Frequency::from_int(100));
    assert_eq!(osc.phase(), phase);
    assert!(core::ptr::eq(osc.table(), wave(15)));
}

#[test]
fn zero_phase_modulation_reads_the_table_at_the_phase() {
    let mut osc = TableOscillator::<LUT_COSINE_SIZE>::new(&LUT_COSINE);
    osc.set_frequency(Frequency::from_int(261));

    let mut phase = 0u32;

    for _ in 0..4096 {
        phase = phase.wrapping_add(osc.increment());
        let cell = (phase >> PHASE_FRACTIONAL_BITS) as usize & (LUT_COSINE_SIZE - 1);

        assert_eq!(osc.phase_mod(PhaseModulation::from_raw(0)), LUT_COSINE[cell]);
        assert_eq!(osc.phase(), phase);
    }
}

#[test]
fn phase_modulation_is_not_dithered() {
    // A phase exactly on a cell boundary would pick a neighbour cell on
    // about half of the dithered reads.
    let mut osc = TableOscillator::<LUT_COSINE_SIZE>::new(&LUT_COSINE);
    osc.set_frequency(Frequency::from_int(32));
    let quarter_cycle = PhaseModulation::from_raw(1 << 14);

    for n in 1..=4096u32 {
        let cell = (n * 2 + LUT_COSINE_SIZE as u32 / 4) as usize & (LUT_COSINE_SIZE - 1);
        assert_eq!(osc.phase_mod(quarter_cycle), LUT_COSINE[cell]);
    }
}

#[test]
fn half_cycle_phase_modulation_inverts_cosine() {
    let frequency = Frequency::from_int(100);
    let mut plain = TableOscillator::<LUT_COSINE_SIZE>::new(&LUT_COSINE);
    let mut shifted = TableOscillator::<LUT_COSINE_SIZE>::new(&LUT_COSINE);
    plain.set_frequency(frequency);
    shifted.set_frequency(frequency);

    let half_cycle = PhaseModulation::from_raw(1 << 15);

    for _ in 0..4096 {
        let a = plain.phase_mod(PhaseModulation::from_raw(0));
        let b = shifted.phase_mod(half_cycle);
        assert_eq!(a, -b);
    }
}

#[test]
fn reset_rewinds_phase() {
    let mut osc = TableOscillator::<WAVE_SIZE>::new(wave(8));
    osc.set_frequency(Frequency::from_int(1000));
    for _ in 0..10 {
        osc.next();
    }
    osc.reset();
    assert_eq!(osc.phase(), 0);
}

#[test]
fn wavetable_sweep() {
    let frequency = Frequency::from_int(110);
    let duration = 4.0;

    let mut osc = TableOscillator::<WAVE_SIZE>::new(wave(0));
    let mut wav_data: Vec<Sample> = Vec::new();
    osc.set_frequency(frequency);

    let samples_per_table = (duration * AUDIO_RATE as f32 / 16.0) as usize;

    for table in 0..16 {
        osc.set_table(wave(table));

        for _ in 0..samples_per_table {
            wav_data.push((osc.next() as Sample) << 6);
        }
    }

    wav_writer::write("oscillator/wavetable_sweep.wav", &wav_data).ok();
}
