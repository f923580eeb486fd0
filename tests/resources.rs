//! Tests for the lookup tables

use dual_osc_dsp::resources::cosine::{LUT_COSINE, LUT_COSINE_SIZE};
use dual_osc_dsp::resources::ratio::LUT_FM_RATIO;
use dual_osc_dsp::resources::voct::LUT_VOCT;
use dual_osc_dsp::resources::waves::{wave, waves, NUM_WAVES, WAVE_SIZE};

#[test]
fn wave_bank_is_built_once() {
    assert!(core::ptr::eq(waves(), waves()));
    assert_eq!(waves().len(), NUM_WAVES);
    assert!(core::ptr::eq(wave(99), &waves()[NUM_WAVES - 1]));
}

#[test]
fn wave_bank_anchor_shapes() {
    let noise = wave(0);
    let sine = wave(4);
    let square = wave(15);

    assert!(noise.iter().any(|&x| x > 64));
    assert!(noise.iter().any(|&x| x < -64));

    assert_eq!(sine[0], 0);
    assert!(sine[WAVE_SIZE / 4] >= 126);
    assert!(sine[3 * WAVE_SIZE / 4] <= -126);

    // Mostly flat on both halves.
    let high = square[..WAVE_SIZE / 2].iter().filter(|&&x| x > 90).count();
    let low = square[WAVE_SIZE / 2..].iter().filter(|&&x| x < -90).count();
    assert!(high > WAVE_SIZE / 3);
    assert!(low > WAVE_SIZE / 3);
}

#[test]
fn neighbouring_waves_are_close() {
    for pair in waves().windows(2).skip(4) {
        let distance: i32 = pair[0]
            .iter()
            .zip(pair[1].iter())
            .map(|(&a, &b)| (a as i32 - b as i32).abs())
            .max()
            .unwrap();
        assert!(distance < 128);
    }
}

#[test]
fn cosine_table() {
    assert_eq!(LUT_COSINE[0], 127);
    assert_eq!(LUT_COSINE[LUT_COSINE_SIZE / 4], 0);
    assert_eq!(LUT_COSINE[LUT_COSINE_SIZE / 2], -127);

    for i in 0..LUT_COSINE_SIZE / 2 {
        assert_eq!(LUT_COSINE[i], -LUT_COSINE[i + LUT_COSINE_SIZE / 2]);
    }
}

#[test]
fn voct_table_endpoints() {
    assert_eq!(LUT_VOCT[0], 1 << 16);
    assert_eq!(LUT_VOCT[1023], 32 << 16);
    assert!(LUT_VOCT.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn ratio_table_range() {
    assert_eq!(LUT_FM_RATIO[0], 0);
    assert_eq!(LUT_FM_RATIO[1023], 248);
    assert!(LUT_FM_RATIO.windows(2).all(|pair| pair[0] <= pair[1]));
}
