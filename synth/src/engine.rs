//! The audio engine: two voice banks (the ambient pad and the interaction
//! cues) mixed through parallel filter, delay and reverb sends, with the
//! send parameters adjustable while the engine runs. Renders mono f32
//! frames; device handling lives in `daub_player`.

use crate::{
    delay::FeedbackDelay,
    envelope::Adsr,
    low_level::{freeverb::Freeverb, moog_ladder::MoogLadderLowPass},
    oscillator::Waveform,
    sequencer::{AmbientSequencer, NoteEvent},
    voice::VoiceBank,
};
use daub_core::{music::Note, progression::AMBIENT_TEMPO, SoundCue};

/// Envelope of the soft sustained pad behind everything.
const PAD_ADSR: Adsr = Adsr {
    attack_s: 0.5,
    decay_s: 1.0,
    sustain_01: 0.8,
    release_s: 2.0,
};
const PAD_LEVEL_DB: f32 = -37.0;

/// Envelope of the short interaction cues.
const CUE_ADSR: Adsr = Adsr {
    attack_s: 0.01,
    decay_s: 0.1,
    sustain_01: 0.1,
    release_s: 0.1,
};
const CUE_LEVEL_DB: f32 = -20.0;

const INITIAL_FILTER_CUTOFF_HZ: f32 = 400.0;
const FILTER_RESONANCE: f32 = 0.1;
// Ambient send settings established once when the pattern starts. The
// cutoff/feedback/wet values are subsequently overridden every frame by
// the density mapper.
const AMBIENT_FILTER_CUTOFF_HZ: f32 = 2000.0;
const AMBIENT_DELAY_FEEDBACK: f32 = 0.4;
const AMBIENT_DELAY_WET: f32 = 0.3;
const AMBIENT_REVERB_ROOM_SIZE: f32 = 0.9;
const AMBIENT_REVERB_WET: f32 = 0.7;

/// Requests sent from the UI thread to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Begin (or restart) the looping background pattern and establish the
    /// initial effect sends.
    StartAmbience,
    Cue(SoundCue),
    SetFilterCutoffHz(f32),
    SetDelayFeedback(f32),
    SetReverbWet(f32),
}

pub struct Engine {
    sample_rate_hz: f32,
    clock: u64,
    sequencer: AmbientSequencer,
    pad: VoiceBank,
    cues: VoiceBank,
    filter: MoogLadderLowPass,
    delay: FeedbackDelay,
    reverb: Freeverb,
    reverb_wet: f32,
    event_buf: Vec<NoteEvent>,
}

impl Engine {
    pub fn new(sample_rate_hz: f32) -> Self {
        Self {
            sample_rate_hz,
            clock: 0,
            sequencer: AmbientSequencer::new(sample_rate_hz),
            pad: VoiceBank::new(Waveform::Triangle, PAD_ADSR, PAD_LEVEL_DB),
            cues: VoiceBank::new(Waveform::Triangle, CUE_ADSR, CUE_LEVEL_DB),
            filter: MoogLadderLowPass::new(
                sample_rate_hz,
                INITIAL_FILTER_CUTOFF_HZ,
                FILTER_RESONANCE,
            ),
            delay: FeedbackDelay::new(
                AMBIENT_TEMPO.eighth_note_s(),
                sample_rate_hz,
                AMBIENT_DELAY_FEEDBACK,
                AMBIENT_DELAY_WET,
            ),
            reverb: Freeverb::new(),
            reverb_wet: AMBIENT_REVERB_WET,
            event_buf: Vec::new(),
        }
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::StartAmbience => {
                self.filter.set_cutoff_hz(AMBIENT_FILTER_CUTOFF_HZ);
                self.delay.feedback = AMBIENT_DELAY_FEEDBACK;
                self.delay.wet = AMBIENT_DELAY_WET;
                self.reverb.set_room_size(AMBIENT_REVERB_ROOM_SIZE);
                self.reverb_wet = AMBIENT_REVERB_WET;
                self.sequencer.start(self.clock);
                log::info!("ambient pattern started");
            }
            Command::Cue(cue) => self.play_cue(cue),
            Command::SetFilterCutoffHz(cutoff_hz) => {
                self.filter.set_cutoff_hz(cutoff_hz)
            }
            Command::SetDelayFeedback(feedback) => {
                self.delay.feedback = feedback
            }
            Command::SetReverbWet(wet) => self.reverb_wet = wet,
        }
    }

    fn play_cue(&mut self, cue: SoundCue) {
        match cue {
            SoundCue::Select(note) => self.trigger_cue_note(
                note,
                AMBIENT_TEMPO.eighth_note_s(),
            ),
            SoundCue::Paint(note) => self.trigger_cue_note(
                note,
                AMBIENT_TEMPO.thirty_second_note_s(),
            ),
            SoundCue::Clear(chord) => {
                for note in chord {
                    self.trigger_cue_note(
                        note,
                        AMBIENT_TEMPO.quarter_note_s(),
                    );
                }
            }
        }
    }

    fn trigger_cue_note(&mut self, note: Note, duration_s: f32) {
        self.cues.trigger_attack_release(
            note,
            duration_s,
            1.0,
            self.sample_rate_hz,
        );
    }

    pub fn filter_cutoff_hz(&self) -> f32 {
        self.filter.cutoff_hz()
    }

    pub fn active_voices(&self) -> usize {
        self.pad.active_voices() + self.cues.active_voices()
    }

    fn next_sample(&mut self) -> f32 {
        self.event_buf.clear();
        self.sequencer.poll(self.clock, &mut self.event_buf);
        for i in 0..self.event_buf.len() {
            let event = self.event_buf[i];
            self.pad.trigger_attack_release(
                event.note,
                event.duration_s,
                event.velocity_01,
                self.sample_rate_hz,
            );
        }
        self.clock += 1;
        let dry = self.pad.tick(self.sample_rate_hz)
            + self.cues.tick(self.sample_rate_hz);
        // parallel sends, all summed with the dry path
        dry + self.filter.process(dry)
            + self.delay.process(dry)
            + (self.reverb.process(dry) * self.reverb_wet)
    }

    /// Fill `out` with mono samples.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use daub_core::{music::NoteName, progression::CLEAR_CHORD};

    const SAMPLE_RATE_HZ: f32 = 8000.0;

    fn rendered_peak(engine: &mut Engine, samples: usize) -> f32 {
        let mut buf = vec![0.0; samples];
        engine.render(&mut buf);
        buf.iter().fold(0.0_f32, |peak, s| peak.max(s.abs()))
    }

    #[test]
    fn silent_before_any_command() {
        let mut engine = Engine::new(SAMPLE_RATE_HZ);
        assert_eq!(rendered_peak(&mut engine, 4000), 0.0);
    }

    #[test]
    fn ambience_sounds_after_start() {
        let mut engine = Engine::new(SAMPLE_RATE_HZ);
        engine.handle(Command::StartAmbience);
        assert!(rendered_peak(&mut engine, 8000) > 0.0);
        assert!(engine.active_voices() > 0);
    }

    #[test]
    fn start_sets_ambient_sends() {
        let mut engine = Engine::new(SAMPLE_RATE_HZ);
        assert_eq!(engine.filter_cutoff_hz(), 400.0);
        engine.handle(Command::StartAmbience);
        assert_eq!(engine.filter_cutoff_hz(), 2000.0);
    }

    #[test]
    fn density_params_override_sends() {
        let mut engine = Engine::new(SAMPLE_RATE_HZ);
        engine.handle(Command::StartAmbience);
        engine.handle(Command::SetFilterCutoffHz(412.5));
        engine.handle(Command::SetDelayFeedback(0.35));
        engine.handle(Command::SetReverbWet(0.25));
        assert_eq!(engine.filter_cutoff_hz(), 412.5);
        assert_eq!(engine.delay.feedback, 0.35);
        assert_eq!(engine.reverb_wet, 0.25);
    }

    #[test]
    fn paint_cue_is_audible_and_short() {
        let mut engine = Engine::new(SAMPLE_RATE_HZ);
        engine.handle(Command::Cue(SoundCue::Paint(
            NoteName::C.in_octave(3),
        )));
        assert_eq!(engine.active_voices(), 1);
        assert!(rendered_peak(&mut engine, 400) > 0.0);
        // 0.075s gate + 0.1s release is well under half a second
        rendered_peak(&mut engine, 4000);
        assert_eq!(engine.active_voices(), 0);
    }

    #[test]
    fn clear_cue_triggers_the_whole_chord() {
        let mut engine = Engine::new(SAMPLE_RATE_HZ);
        engine.handle(Command::Cue(SoundCue::Clear(CLEAR_CHORD)));
        assert_eq!(engine.active_voices(), 3);
    }

    #[test]
    fn restart_discards_previously_scheduled_arpeggio_notes() {
        let mut engine = Engine::new(SAMPLE_RATE_HZ);
        engine.handle(Command::StartAmbience);
        // half a second in: sustained chord (4) + arpeggio notes at 0s and
        // 0.25s have sounded, notes at 0.5s and 0.75s are still pending
        rendered_peak(&mut engine, 4000);
        assert_eq!(engine.active_voices(), 6);
        engine.handle(Command::StartAmbience);
        rendered_peak(&mut engine, 1000);
        // the restart replays the first chord (4 + 1 arpeggio note); the
        // stale pending notes from before the restart never fire
        assert_eq!(engine.active_voices(), 11);
    }
}
