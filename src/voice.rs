//! Mode selection, control-rate parameter computation and audio-rate
//! dispatch.
//!
//! [`Voice::update_control`] is the control task: it samples the panel,
//! recomputes a complete [`ControlFrame`] for the selected mode and latches
//! it. [`Voice::update_audio`] is the audio task: it renders one sample from
//! the latched frame. Only the control task writes the frame, and it swaps
//! in a finished frame in one assignment, so the audio task always sees a
//! consistent set of parameters.
//!
//! The four oscillator units keep their phase across mode changes. Units of
//! the inactive mode are neither retuned nor advanced.

use crate::engine::fm_engine::{ratio, FmEngine, FmParameters, Ratio};
use crate::engine::wavetable_engine::{WavetableEngine, WavetableParameters};
use crate::engine::{depth, pitch_to_frequency, Depth, Engine, Frequency};
use crate::hardware::{read_clamped, AnalogInput, ControlInputs};
use crate::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SynthesisMode {
    Wavetable,
    Fm,
}

impl SynthesisMode {
    /// The switch's "up" contact is pulled high when open: open selects FM,
    /// closed selects the wavetable.
    #[inline]
    pub fn from_switch(up: bool) -> Self {
        if up {
            Self::Fm
        } else {
            Self::Wavetable
        }
    }

    /// The status LED is lit in wavetable mode.
    #[inline]
    pub fn status_led(self) -> bool {
        self == Self::Wavetable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeParameters {
    Wavetable(WavetableParameters),
    Fm(FmParameters),
}

/// Parameters computed by one control tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFrame {
    pub frequency: Frequency,
    pub depth: Depth,
    pub parameters: ModeParameters,
}

impl ControlFrame {
    #[inline]
    pub fn mode(&self) -> SynthesisMode {
        match self.parameters {
            ModeParameters::Wavetable(_) => SynthesisMode::Wavetable,
            ModeParameters::Fm(_) => SynthesisMode::Fm,
        }
    }
}

// Mode-specific values that do not depend on the shared pitch and depth.
enum PendingParameters {
    Wavetable(WavetableParameters),
    Fm(Ratio),
}

#[derive(Debug, Clone, Default)]
pub struct Voice {
    frame: Option<ControlFrame>,

    wavetable_engine: WavetableEngine,
    fm_engine: FmEngine,
}

impl Voice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the latched frame and rewinds every oscillator unit.
    pub fn init(&mut self) {
        self.frame = None;
        self.wavetable_engine.init();
        self.fm_engine.init();
    }

    /// Frame latched by the last control tick, `None` before the first one.
    #[inline]
    pub fn frame(&self) -> Option<&ControlFrame> {
        self.frame.as_ref()
    }

    #[inline]
    pub fn mode(&self) -> Option<SynthesisMode> {
        self.frame.as_ref().map(ControlFrame::mode)
    }

    pub fn wavetable_engine(&self) -> &WavetableEngine {
        &self.wavetable_engine
    }

    pub fn fm_engine(&self) -> &FmEngine {
        &self.fm_engine
    }

    /// Control task. Reads the panel and latches a new frame.
    pub fn update_control<T: ControlInputs + ?Sized>(&mut self, io: &mut T) {
        let mode = SynthesisMode::from_switch(io.read_mode_switch());
        io.set_status_led(mode.status_led());

        let previous_mode = self.mode();
        if previous_mode != Some(mode) {
            log::debug!("Mode: {:?} -> {:?}", previous_mode, mode);
        }

        // Mode-specific reads come first, then the shared depth and pitch.
        let knob_2 = read_clamped(io, AnalogInput::Knob2);
        let cv_1 = read_clamped(io, AnalogInput::Cv1);
        let pending = match mode {
            SynthesisMode::Wavetable => {
                PendingParameters::Wavetable(WavetableParameters::from_inputs(knob_2, cv_1))
            }
            SynthesisMode::Fm => PendingParameters::Fm(ratio(knob_2, cv_1)),
        };

        let depth = depth(
            read_clamped(io, AnalogInput::Knob3),
            read_clamped(io, AnalogInput::Cv2),
        );
        let frequency = pitch_to_frequency(
            read_clamped(io, AnalogInput::Knob1),
            read_clamped(io, AnalogInput::VOct),
        );

        let parameters = match pending {
            PendingParameters::Wavetable(parameters) => {
                self.wavetable_engine.retune(frequency, &parameters);
                ModeParameters::Wavetable(parameters)
            }
            PendingParameters::Fm(ratio) => {
                let parameters = FmParameters::new(frequency, ratio, depth);
                self.fm_engine.retune(frequency, &parameters);
                ModeParameters::Fm(parameters)
            }
        };

        let frame = ControlFrame {
            frequency,
            depth,
            parameters,
        };
        log::trace!("{:?}", frame);

        self.frame = Some(frame);
    }

    /// Audio task. Renders one sample from the latched frame, or silence if
    /// no control tick has run yet.
    #[inline]
    pub fn update_audio(&mut self) -> Sample {
        let Some(frame) = self.frame.as_ref() else {
            return 0;
        };

        match &frame.parameters {
            ModeParameters::Wavetable(parameters) => {
                self.wavetable_engine.render(frame.depth, parameters)
            }
            ModeParameters::Fm(parameters) => self.fm_engine.render(frame.depth, parameters),
        }
    }
}
