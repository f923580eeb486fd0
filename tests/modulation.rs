//! Modulation sources, as 10-bit input codes

use dual_osc_dsp::hardware::ADC_MAX;

/// Returns a triangle in range 0..=ADC_MAX
pub fn triangle(block_no: usize, block_count: usize, periods: f32) -> u16 {
    let mut phase = block_no as f32 / block_count as f32 * periods;

    while phase > 1.0 {
        phase -= 1.0
    }

    let waveform = if phase < 0.5 {
        phase * 2.0
    } else {
        (1.0 - phase) * 2.0
    };

    (waveform * ADC_MAX as f32) as u16
}

/// Returns a ramp in range 0..=ADC_MAX
pub fn ramp_up(block_no: usize, block_count: usize) -> u16 {
    let phase = block_no as f32 / block_count as f32;

    (phase * ADC_MAX as f32) as u16
}
