//! Polyphonic voice bank. Each trigger allocates a voice that holds its
//! gate open for the requested duration and is dropped once its release
//! tail has faded out.

use crate::{
    envelope::{Adsr, AdsrLinear01},
    oscillator::{Oscillator, Waveform},
};
use daub_core::music::Note;

pub fn db_to_gain(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}

#[derive(Debug, Clone, Copy)]
struct Voice {
    oscillator: Oscillator,
    envelope: AdsrLinear01,
    velocity: f32,
    gate_remaining_samples: u64,
}

impl Voice {
    fn tick(&mut self, sample_rate_hz: f32) -> f32 {
        let gate = self.gate_remaining_samples > 0;
        if gate {
            self.gate_remaining_samples -= 1;
        }
        self.oscillator.tick(sample_rate_hz)
            * self.envelope.tick(gate, sample_rate_hz)
            * self.velocity
    }

    fn is_finished(&self) -> bool {
        self.gate_remaining_samples == 0 && self.envelope.is_idle()
    }
}

#[derive(Debug)]
pub struct VoiceBank {
    waveform: Waveform,
    adsr: Adsr,
    gain: f32,
    voices: Vec<Voice>,
}

impl VoiceBank {
    pub fn new(waveform: Waveform, adsr: Adsr, level_db: f32) -> Self {
        Self {
            waveform,
            adsr,
            gain: db_to_gain(level_db),
            voices: Vec::new(),
        }
    }

    pub fn trigger_attack_release(
        &mut self,
        note: Note,
        duration_s: f32,
        velocity_01: f32,
        sample_rate_hz: f32,
    ) {
        let gate_remaining_samples =
            (duration_s * sample_rate_hz).max(1.0) as u64;
        self.voices.push(Voice {
            oscillator: Oscillator::new(self.waveform, note.freq_hz()),
            envelope: AdsrLinear01::new(self.adsr),
            velocity: velocity_01,
            gate_remaining_samples,
        });
    }

    pub fn tick(&mut self, sample_rate_hz: f32) -> f32 {
        let mut sum = 0.0;
        for voice in self.voices.iter_mut() {
            sum += voice.tick(sample_rate_hz);
        }
        self.voices.retain(|voice| !voice.is_finished());
        sum * self.gain
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }
}
