//! Panel I/O seen by the control task.
//!
//! The analog front end, the switch and the status LED belong to the
//! firmware's I/O layer. The control task only needs bounded-time reads of
//! the current value of each input, which is what [`ControlInputs`] asks for.

/// Largest value of a 10-bit analog read.
pub const ADC_MAX: u16 = 1023;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalogInput {
    /// Knob 1, coarse pitch.
    Knob1,
    /// Knob 2, wavetable position or FM ratio.
    Knob2,
    /// Knob 3, level or FM depth.
    Knob3,
    /// Pitch CV, 1 V/oct over a 0 - 5 V range.
    VOct,
    /// Summed with knob 2.
    Cv1,
    /// Summed with knob 3.
    Cv2,
}

pub trait ControlInputs {
    /// Latest 10-bit sample of an analog input. Must not block.
    fn read_analog(&mut self, input: AnalogInput) -> u16;

    /// Level of the mode switch's "up" contact. The "down" contact is not
    /// wired to anything the engine looks at.
    fn read_mode_switch(&mut self) -> bool;

    fn set_status_led(&mut self, on: bool);
}

/// Reads an analog input and saturates anything a misbehaving I/O layer
/// returns above [`ADC_MAX`].
#[inline]
pub fn read_clamped<T: ControlInputs + ?Sized>(io: &mut T, input: AnalogInput) -> u16 {
    io.read_analog(input).min(ADC_MAX)
}

/// Plain snapshot of the panel, for hosts that feed the engine from
/// somewhere other than real hardware.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub knob_1: u16,
    pub knob_2: u16,
    pub knob_3: u16,
    pub voct: u16,
    pub cv_1: u16,
    pub cv_2: u16,
    pub switch_up: bool,

    /// Last value written by the engine.
    pub status_led: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, input: AnalogInput, value: u16) {
        match input {
            AnalogInput::Knob1 => self.knob_1 = value,
            AnalogInput::Knob2 => self.knob_2 = value,
            AnalogInput::Knob3 => self.knob_3 = value,
            AnalogInput::VOct => self.voct = value,
            AnalogInput::Cv1 => self.cv_1 = value,
            AnalogInput::Cv2 => self.cv_2 = value,
        }
    }
}

impl ControlInputs for PanelState {
    fn read_analog(&mut self, input: AnalogInput) -> u16 {
        match input {
            AnalogInput::Knob1 => self.knob_1,
            AnalogInput::Knob2 => self.knob_2,
            AnalogInput::Knob3 => self.knob_3,
            AnalogInput::VOct => self.voct,
            AnalogInput::Cv1 => self.cv_1,
            AnalogInput::Cv2 => self.cv_2,
        }
    }

    fn read_mode_switch(&mut self) -> bool {
        self.switch_up
    }

    fn set_status_led(&mut self, on: bool) {
        self.status_led = on;
    }
}
