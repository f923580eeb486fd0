//! Single-threaded tick loop interleaving the control and audio tasks.
//!
//! Every [`CONTROL_PERIOD`] audio ticks one control tick runs first. Both
//! tasks take `&mut` access to the same [`Voice`], so they can never overlap.

use crate::hardware::ControlInputs;
use crate::voice::Voice;
use crate::{Sample, CONTROL_PERIOD};

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    voice: Voice,
    ticks_until_control: usize,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.voice.init();
        self.ticks_until_control = 0;
    }

    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    /// Runs one audio tick, preceded by a control tick when one is due.
    #[inline]
    pub fn tick<T: ControlInputs + ?Sized>(&mut self, io: &mut T) -> Sample {
        if self.ticks_until_control == 0 {
            self.voice.update_control(io);
            self.ticks_until_control = CONTROL_PERIOD;
        }
        self.ticks_until_control -= 1;

        self.voice.update_audio()
    }

    #[inline]
    pub fn render<T: ControlInputs + ?Sized>(&mut self, io: &mut T, out: &mut [Sample]) {
        for out_sample in out.iter_mut() {
            *out_sample = self.tick(io);
        }
    }
}
