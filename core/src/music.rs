//! 12-tone equal temperament following the A_440Hz convention. Only the
//! MIDI range is representable. C_4 is considered to be middle C.

pub const NOTES_PER_OCTAVE: u8 = 12;

const A_4_FREQ_HZ: f32 = 440.0;
const A_4_MIDI_INDEX: u8 = 69;
const MAX_MIDI_INDEX: u8 = 127;

pub fn freq_hz_of_midi_index(midi_index: u8) -> f32 {
    A_4_FREQ_HZ
        * 2_f32.powf(
            (midi_index as f32 - A_4_MIDI_INDEX as f32)
                / (NOTES_PER_OCTAVE as f32),
        )
}

/// A note without an octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NoteName {
    relative_midi_index: u8,
}

impl NoteName {
    const fn from_index(relative_midi_index: u8) -> Self {
        assert!(relative_midi_index < NOTES_PER_OCTAVE);
        Self {
            relative_midi_index,
        }
    }

    pub const C: Self = Self::from_index(0);
    pub const C_SHARP: Self = Self::from_index(1);
    pub const D: Self = Self::from_index(2);
    pub const D_SHARP: Self = Self::from_index(3);
    pub const E: Self = Self::from_index(4);
    pub const F: Self = Self::from_index(5);
    pub const F_SHARP: Self = Self::from_index(6);
    pub const G: Self = Self::from_index(7);
    pub const G_SHARP: Self = Self::from_index(8);
    pub const A: Self = Self::from_index(9);
    pub const A_SHARP: Self = Self::from_index(10);
    pub const B: Self = Self::from_index(11);

    pub const fn in_octave(self, octave: i8) -> Note {
        Note::new(self, octave)
    }
}

/// Definition of notes based on MIDI tuned to A_440. Octaves run from -1
/// (mostly below the range of human hearing) to 9 (truncated at G_9 by the
/// MIDI range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Note {
    midi_index: u8,
}

impl Note {
    pub const fn new(name: NoteName, octave: i8) -> Self {
        assert!(octave >= -1 && octave <= 9);
        let midi_index =
            ((octave + 1) as u8 * NOTES_PER_OCTAVE) + name.relative_midi_index;
        assert!(midi_index <= MAX_MIDI_INDEX);
        Self { midi_index }
    }

    pub const fn to_midi_index(self) -> u8 {
        self.midi_index
    }

    pub fn freq_hz(self) -> f32 {
        freq_hz_of_midi_index(self.midi_index)
    }
}

/// Tempo-relative durations. Durations follow the usual convention where a
/// quarter note lasts one beat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tempo {
    pub bpm: f32,
}

impl Tempo {
    pub const fn new(bpm: f32) -> Self {
        Self { bpm }
    }

    pub fn beat_s(self) -> f32 {
        60.0 / self.bpm
    }

    pub fn half_note_s(self) -> f32 {
        self.beat_s() * 2.0
    }

    pub fn quarter_note_s(self) -> f32 {
        self.beat_s()
    }

    pub fn eighth_note_s(self) -> f32 {
        self.beat_s() / 2.0
    }

    pub fn thirty_second_note_s(self) -> f32 {
        self.beat_s() / 8.0
    }
}
