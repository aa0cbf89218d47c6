//! The ambient layer: a cyclic four-chord progression ticked on the audio
//! sample clock. Each chord-change tick emits the full chord sustained
//! softly plus its notes re-triggered as an overlapping arpeggio.

use daub_core::{
    music::Note,
    progression::{AMBIENT_PROGRESSION, AMBIENT_TEMPO},
};

/// Seconds between successive arpeggio notes within a chord.
pub const ARPEGGIO_STEP_S: f32 = 0.25;
pub const CHORD_VELOCITY: f32 = 0.3;
pub const ARPEGGIO_VELOCITY: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    pub note: Note,
    pub duration_s: f32,
    pub velocity_01: f32,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    at_sample: u64,
    event: NoteEvent,
}

/// Loops forever once started. Restarting is idempotent: pending
/// scheduled notes are discarded before the pattern is re-established.
#[derive(Debug)]
pub struct AmbientSequencer {
    sample_rate_hz: f32,
    interval_samples: u64,
    chord_index: usize,
    next_chord_at: u64,
    pending: Vec<Scheduled>,
    running: bool,
}

impl AmbientSequencer {
    pub fn new(sample_rate_hz: f32) -> Self {
        let interval_samples =
            (AMBIENT_TEMPO.half_note_s() * sample_rate_hz) as u64;
        Self {
            sample_rate_hz,
            interval_samples,
            chord_index: 0,
            next_chord_at: 0,
            pending: Vec::new(),
            running: false,
        }
    }

    pub fn start(&mut self, now_sample: u64) {
        self.pending.clear();
        self.chord_index = 0;
        self.next_chord_at = now_sample;
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Collect every note due at `now_sample` into `out`. Expected to be
    /// called for every sample in order.
    pub fn poll(&mut self, now_sample: u64, out: &mut Vec<NoteEvent>) {
        if !self.running {
            return;
        }
        while now_sample >= self.next_chord_at {
            let chord = AMBIENT_PROGRESSION[self.chord_index];
            for note in chord {
                out.push(NoteEvent {
                    note,
                    duration_s: AMBIENT_TEMPO.half_note_s(),
                    velocity_01: CHORD_VELOCITY,
                });
            }
            for (i, &note) in chord.iter().enumerate() {
                let offset =
                    (i as f32 * ARPEGGIO_STEP_S * self.sample_rate_hz) as u64;
                self.pending.push(Scheduled {
                    at_sample: self.next_chord_at + offset,
                    event: NoteEvent {
                        note,
                        duration_s: AMBIENT_TEMPO.quarter_note_s(),
                        velocity_01: ARPEGGIO_VELOCITY,
                    },
                });
            }
            self.chord_index =
                (self.chord_index + 1) % AMBIENT_PROGRESSION.len();
            self.next_chord_at += self.interval_samples;
        }
        self.pending.retain(|scheduled| {
            if scheduled.at_sample <= now_sample {
                out.push(scheduled.event);
                false
            } else {
                true
            }
        });
    }
}
