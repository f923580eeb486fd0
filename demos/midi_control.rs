//! Oscillator with MIDI control of the panel.
//!
//! - CC 21: knob 1 (pitch)
//! - CC 22: knob 2 (wavetable position / FM ratio)
//! - CC 23: knob 3 (level / FM depth)
//! - CC 24: CV 1
//! - CC 25: CV 2
//! - CC 26: output volume
//! - CC 27: mode switch, FM above 63
//! - Note on: V/oct input, one octave per 12 notes above C1

use audio_midi_shell::{AudioGenerator, AudioMidiShell};
use simple_logger::SimpleLogger;

use dual_osc_dsp::hardware::{AnalogInput, PanelState, ADC_MAX};
use dual_osc_dsp::scheduler::Scheduler;
use dual_osc_dsp::{sample_to_f32, Sample, AUDIO_RATE};

const BLOCK_SIZE: usize = 64;

// 1023 codes over five octaves.
const CODES_PER_SEMITONE: f32 = 1023.0 / 60.0;
const LOWEST_NOTE: u8 = 24;

fn main() -> ! {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    AudioMidiShell::run_forever(AUDIO_RATE, BLOCK_SIZE, App::new());
}

#[derive(Debug)]
struct App {
    scheduler: Scheduler,
    panel: PanelState,
    volume: f32,
}

impl App {
    pub fn new() -> Self {
        Self {
            scheduler: Scheduler::new(),
            panel: PanelState::new(),
            volume: 0.5,
        }
    }

    fn set_input(&mut self, input: AnalogInput, value: u8) {
        let value = (value as u32 * ADC_MAX as u32 / 127) as u16;
        self.panel.set(input, value);
        log::info!("{:?}: {}", input, value);
    }
}

impl AudioGenerator for App {
    fn init(&mut self, _block_size: usize) {
        self.panel.knob_1 = 256;
        self.panel.knob_2 = 512;
        self.panel.knob_3 = 768;
        self.scheduler.init();
    }

    fn process(&mut self, samples_left: &mut [f32], samples_right: &mut [f32]) {
        let mut out: Vec<Sample> = vec![0; samples_left.len()];

        self.scheduler.render(&mut self.panel, &mut out);

        for ((left, right), sample) in samples_left
            .iter_mut()
            .zip(samples_right.iter_mut())
            .zip(out.iter())
        {
            let value = sample_to_f32(*sample) * self.volume;
            *left = value;
            *right = value;
        }
    }

    fn process_midi(&mut self, message: Vec<u8>) {
        match message[0] & 0xF0 {
            0x90 if message[2] != 0 => {
                // Note on
                let note = message[1].saturating_sub(LOWEST_NOTE);
                let voct = (note as f32 * CODES_PER_SEMITONE).min(ADC_MAX as f32) as u16;
                self.panel.voct = voct;
                log::info!("Note on: {} -> V/oct {}", message[1], voct);
            }
            0xB0 => {
                // Control change
                let value = message[2];
                match message[1] {
                    21 => self.set_input(AnalogInput::Knob1, value),
                    22 => self.set_input(AnalogInput::Knob2, value),
                    23 => self.set_input(AnalogInput::Knob3, value),
                    24 => self.set_input(AnalogInput::Cv1, value),
                    25 => self.set_input(AnalogInput::Cv2, value),
                    26 => {
                        self.volume = value as f32 / 127.0;
                        log::info!("Volume: {}", self.volume);
                    }
                    27 => {
                        self.panel.switch_up = value > 63;
                        log::info!("Switch up: {}", self.panel.switch_up);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
