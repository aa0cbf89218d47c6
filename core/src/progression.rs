//! The fixed musical material behind the toy: the looping ambient chord
//! progression and the notes used for discrete interaction cues.

use crate::music::{Note, NoteName, Tempo};

pub type Chord4 = [Note; 4];

pub const AMBIENT_TEMPO: Tempo = Tempo::new(100.0);

/// A gentle progression of seventh chords (Em7, Am7, Dm7, G7), played in
/// listed order, wrapping after the last.
pub const AMBIENT_PROGRESSION: [Chord4; 4] = [
    [
        NoteName::E.in_octave(3),
        NoteName::G.in_octave(3),
        NoteName::B.in_octave(3),
        NoteName::D.in_octave(4),
    ],
    [
        NoteName::A.in_octave(3),
        NoteName::C.in_octave(4),
        NoteName::E.in_octave(4),
        NoteName::G.in_octave(4),
    ],
    [
        NoteName::D.in_octave(3),
        NoteName::F.in_octave(3),
        NoteName::A.in_octave(3),
        NoteName::C.in_octave(4),
    ],
    [
        NoteName::G.in_octave(3),
        NoteName::B.in_octave(3),
        NoteName::D.in_octave(4),
        NoteName::F.in_octave(4),
    ],
];

/// Each qualifying paint stroke plays one of these, chosen uniformly at
/// random, independent of color and position.
pub const PAINT_CUE_NOTES: [Note; 4] = [
    NoteName::C.in_octave(3),
    NoteName::E.in_octave(3),
    NoteName::G.in_octave(3),
    NoteName::B.in_octave(3),
];

/// Low C power chord played when the canvas is cleared.
pub const CLEAR_CHORD: [Note; 3] = [
    NoteName::C.in_octave(2),
    NoteName::G.in_octave(2),
    NoteName::C.in_octave(3),
];

/// C major scale starting at middle C, mapped index-for-index onto the
/// palette for color-selection cues.
pub const SELECTION_SCALE: [Note; 10] = [
    NoteName::C.in_octave(4),
    NoteName::D.in_octave(4),
    NoteName::E.in_octave(4),
    NoteName::F.in_octave(4),
    NoteName::G.in_octave(4),
    NoteName::A.in_octave(4),
    NoteName::B.in_octave(4),
    NoteName::C.in_octave(5),
    NoteName::D.in_octave(5),
    NoteName::E.in_octave(5),
];
