//! Tests for the voice and the tick scheduler.

mod modulation;
mod wav_writer;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use dual_osc_dsp::engine::fm_engine::FmParameters;
use dual_osc_dsp::engine::{Depth, Frequency};
use dual_osc_dsp::hardware::{PanelState, ADC_MAX};
use dual_osc_dsp::oscillator::table_oscillator::{TableOscillator, PHASE_FRACTIONAL_BITS};
use dual_osc_dsp::resources::cosine::{LUT_COSINE, LUT_COSINE_SIZE};
use dual_osc_dsp::scheduler::Scheduler;
use dual_osc_dsp::voice::{ModeParameters, SynthesisMode, Voice};
use dual_osc_dsp::{Sample, AUDIO_RATE, CONTROL_PERIOD};

fn init_logger() {
    SimpleLogger::new()
        .with_level(LevelFilter::Debug)
        .init()
        .ok();
}

fn wavetable_panel() -> PanelState {
    PanelState {
        knob_1: 300,
        knob_2: 400,
        knob_3: 900,
        switch_up: false,
        ..PanelState::default()
    }
}

fn fm_panel() -> PanelState {
    PanelState {
        knob_1: 300,
        knob_2: 300,
        knob_3: 200,
        switch_up: true,
        ..PanelState::default()
    }
}

/// One control tick followed by a control period of audio ticks.
fn run_period(voice: &mut Voice, panel: &mut PanelState, out: &mut Vec<Sample>) {
    voice.update_control(panel);
    for _ in 0..CONTROL_PERIOD {
        out.push(voice.update_audio());
    }
}

#[test]
fn silent_before_first_control_tick() {
    let mut voice = Voice::new();
    voice.init();

    assert!(voice.frame().is_none());
    assert!(voice.mode().is_none());
    for _ in 0..CONTROL_PERIOD {
        assert_eq!(voice.update_audio(), 0);
    }
}

#[test]
fn switch_selects_mode_and_led() {
    init_logger();

    let mut voice = Voice::new();

    let mut panel = wavetable_panel();
    voice.update_control(&mut panel);
    assert_eq!(voice.mode(), Some(SynthesisMode::Wavetable));
    assert!(panel.status_led);

    panel.switch_up = true;
    voice.update_control(&mut panel);
    assert_eq!(voice.mode(), Some(SynthesisMode::Fm));
    assert!(!panel.status_led);
}

#[test]
fn lowest_pitch_is_32_hz() {
    let mut voice = Voice::new();
    let mut panel = PanelState::default();

    voice.update_control(&mut panel);

    let frame = voice.frame().unwrap();
    assert_eq!(frame.frequency, Frequency::from_int(32));
    assert_eq!(frame.frequency.to_f32(), 32.0);
}

#[test]
fn unchanged_panel_keeps_mode_and_parameters() {
    for mut panel in [wavetable_panel(), fm_panel()] {
        let mut voice = Voice::new();

        voice.update_control(&mut panel);
        let first = *voice.frame().unwrap();
        let led = panel.status_led;

        for _ in 0..10 {
            voice.update_audio();
        }

        voice.update_control(&mut panel);
        assert_eq!(*voice.frame().unwrap(), first);
        assert_eq!(panel.status_led, led);
    }
}

#[test]
fn fm_frame_is_consistent() {
    let mut voice = Voice::new();
    let mut panel = fm_panel();

    for knob in [0, 100, 500, ADC_MAX] {
        panel.knob_2 = knob;
        panel.cv_2 = knob / 2;
        voice.update_control(&mut panel);

        let frame = voice.frame().unwrap();
        let ModeParameters::Fm(parameters) = frame.parameters else {
            panic!("expected FM parameters");
        };
        assert_eq!(
            parameters,
            FmParameters::new(frame.frequency, parameters.ratio, frame.depth)
        );
    }
}

#[test]
fn wavetable_units_follow_position() {
    let mut voice = Voice::new();
    let mut panel = wavetable_panel();
    panel.knob_2 = 1023;

    voice.update_control(&mut panel);

    let (a, b) = voice.wavetable_engine().tables();
    let waves = dual_osc_dsp::resources::waves::waves();
    assert!(core::ptr::eq(a, &waves[14]));
    assert!(core::ptr::eq(b, &waves[15]));
}

#[test]
fn zero_depth_fm_is_the_plain_carrier() {
    let mut voice = Voice::new();
    let mut panel = fm_panel();
    panel.knob_3 = 0;
    panel.cv_2 = 0;
    panel.knob_2 = ADC_MAX;

    voice.update_control(&mut panel);
    let frame = *voice.frame().unwrap();
    assert_eq!(frame.depth, Depth::from_raw(0));
    let ModeParameters::Fm(parameters) = frame.parameters else {
        panic!("expected FM parameters");
    };
    assert_eq!(parameters.deviation.raw(), 0);

    let mut carrier = TableOscillator::<LUT_COSINE_SIZE>::new(&LUT_COSINE);
    carrier.set_frequency(frame.frequency);
    let increment = carrier.increment();
    assert_eq!(voice.fm_engine().increments().0, increment);

    let mut phase = 0u32;

    for _ in 0..CONTROL_PERIOD {
        phase = phase.wrapping_add(increment);
        let cell = (phase >> PHASE_FRACTIONAL_BITS) as usize & (LUT_COSINE_SIZE - 1);
        assert_eq!(voice.update_audio(), (LUT_COSINE[cell] as Sample) << 6);
    }
}

#[test]
fn zero_depth_wavetable_is_silent() {
    let mut voice = Voice::new();
    let mut panel = wavetable_panel();
    panel.knob_3 = 0;

    voice.update_control(&mut panel);
    for _ in 0..CONTROL_PERIOD {
        assert_eq!(voice.update_audio(), 0);
    }
}

#[test]
fn output_stays_within_14_bits() {
    let mut voice = Voice::new();

    for mut panel in [wavetable_panel(), fm_panel()] {
        panel.knob_3 = ADC_MAX;
        panel.cv_2 = ADC_MAX;

        for position in (0..=ADC_MAX).step_by(31) {
            panel.knob_2 = position;
            voice.update_control(&mut panel);

            for _ in 0..CONTROL_PERIOD {
                let sample = voice.update_audio();
                assert!((-8192..=8191).contains(&sample));
            }
        }
    }
}

#[test]
fn out_of_range_reads_are_clamped() {
    let mut voice = Voice::new();
    let mut panel = wavetable_panel();
    panel.knob_1 = u16::MAX;
    panel.knob_2 = u16::MAX;
    panel.cv_1 = u16::MAX;
    panel.voct = u16::MAX;

    voice.update_control(&mut panel);

    let frame = voice.frame().unwrap();
    assert_eq!(frame.frequency, Frequency::from_int(543 * 32));
    let ModeParameters::Wavetable(parameters) = frame.parameters else {
        panic!("expected wavetable parameters");
    };
    assert_eq!(parameters.upper, 15);
}

#[test]
fn mode_change_waits_for_control_tick() {
    let mut voice = Voice::new();
    let mut panel = wavetable_panel();
    voice.update_control(&mut panel);

    panel.switch_up = true;
    for _ in 0..CONTROL_PERIOD {
        voice.update_audio();
    }
    assert_eq!(voice.mode(), Some(SynthesisMode::Wavetable));

    voice.update_control(&mut panel);
    assert_eq!(voice.mode(), Some(SynthesisMode::Fm));
}

#[test]
fn mode_switch_keeps_oscillator_phases() {
    const PERIODS: usize = 20;

    let mut fm_only = Voice::new();
    let mut wavetable_only = Voice::new();
    let mut switching = Voice::new();

    let mut fm_reference = Vec::new();
    let mut wavetable_reference = Vec::new();
    let mut switched = Vec::new();

    for _ in 0..2 * PERIODS {
        run_period(&mut fm_only, &mut fm_panel(), &mut fm_reference);
    }
    for _ in 0..PERIODS {
        run_period(&mut wavetable_only, &mut wavetable_panel(), &mut wavetable_reference);
    }

    // FM, then wavetable, then FM again.
    for _ in 0..PERIODS {
        run_period(&mut switching, &mut fm_panel(), &mut switched);
    }
    for _ in 0..PERIODS {
        run_period(&mut switching, &mut wavetable_panel(), &mut switched);
    }
    for _ in 0..PERIODS {
        run_period(&mut switching, &mut fm_panel(), &mut switched);
    }

    let span = PERIODS * CONTROL_PERIOD;

    // The outgoing FM stream is untouched up to the boundary.
    assert_eq!(switched[..span], fm_reference[..span]);

    // The wavetable units start from where they were, here from zero.
    assert_eq!(switched[span..2 * span], wavetable_reference[..]);

    // The FM units resume exactly where they stopped.
    assert_eq!(switched[2 * span..], fm_reference[span..]);
}

#[test]
fn scheduler_runs_control_tick_first() {
    let mut scheduler = Scheduler::new();
    let mut panel = wavetable_panel();

    assert!(scheduler.voice().frame().is_none());
    scheduler.tick(&mut panel);
    assert_eq!(scheduler.voice().mode(), Some(SynthesisMode::Wavetable));
}

#[test]
fn scheduler_latches_at_control_boundaries() {
    let mut scheduler = Scheduler::new();
    let mut panel = wavetable_panel();
    scheduler.init();

    scheduler.tick(&mut panel);
    panel.switch_up = true;

    for _ in 1..CONTROL_PERIOD {
        scheduler.tick(&mut panel);
        assert_eq!(scheduler.voice().mode(), Some(SynthesisMode::Wavetable));
    }

    scheduler.tick(&mut panel);
    assert_eq!(scheduler.voice().mode(), Some(SynthesisMode::Fm));
}

#[test]
fn scheduler_matches_manual_interleaving() {
    let mut scheduler = Scheduler::new();
    let mut voice = Voice::new();
    let mut panel = fm_panel();

    let mut rendered = vec![0; 4 * CONTROL_PERIOD];
    scheduler.render(&mut panel, &mut rendered);

    let mut expected = Vec::new();
    for _ in 0..4 {
        run_period(&mut voice, &mut panel, &mut expected);
    }

    assert_eq!(rendered, expected);
}

#[test]
fn wavetable_morph() {
    init_logger();

    let duration = 4.0;
    let mut scheduler = Scheduler::new();
    let mut panel = wavetable_panel();
    let mut out = [0; CONTROL_PERIOD];
    let mut wav_data = Vec::new();

    let blocks = (duration * AUDIO_RATE as f32 / CONTROL_PERIOD as f32) as usize;

    for n in 0..blocks {
        panel.knob_2 = modulation::ramp_up(n, blocks);
        scheduler.render(&mut panel, &mut out);
        wav_data.extend_from_slice(&out);
    }

    wav_writer::write("voice/wavetable_morph.wav", &wav_data).ok();
}

#[test]
fn fm_ratio_and_depth() {
    init_logger();

    let duration = 4.0;
    let mut scheduler = Scheduler::new();
    let mut panel = fm_panel();
    let mut out = [0; CONTROL_PERIOD];
    let mut wav_data = Vec::new();

    let blocks = (duration * AUDIO_RATE as f32 / CONTROL_PERIOD as f32) as usize;

    for n in 0..blocks {
        panel.knob_2 = modulation::ramp_up(n, blocks);
        panel.knob_3 = modulation::triangle(n, blocks, 4.0);
        scheduler.render(&mut panel, &mut out);
        wav_data.extend_from_slice(&out);
    }

    wav_writer::write("voice/fm.wav", &wav_data).ok();
}
