//! The ordered color palette. Fixed at startup; index positions are stable
//! for the whole session and map one-to-one onto the selection scale.

use crate::{music::Note, progression::SELECTION_SCALE};
use rgb_int::Rgb24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Rgb24,
    /// Note played when this entry is selected.
    pub note: Note,
}

pub const NUM_ENTRIES: usize = 10;

#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new() -> Self {
        let colors: [(&'static str, Rgb24); NUM_ENTRIES] = [
            ("red", Rgb24::new(255, 0, 0)),
            ("orange", Rgb24::new(255, 165, 0)),
            ("yellow", Rgb24::new(255, 255, 0)),
            ("green", Rgb24::new(0, 128, 0)),
            ("cyan", Rgb24::new(0, 255, 255)),
            ("blue", Rgb24::new(0, 0, 255)),
            ("pink", Rgb24::new(255, 192, 203)),
            ("brown", Rgb24::new(165, 42, 42)),
            ("white", Rgb24::new(255, 255, 255)),
            ("black", Rgb24::new(0, 0, 0)),
        ];
        let entries = colors
            .into_iter()
            .zip(SELECTION_SCALE)
            .map(|((name, color), note)| PaletteEntry { name, color, note })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<PaletteEntry> {
        self.entries.get(index).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = PaletteEntry> + '_ {
        self.entries.iter().copied()
    }

    /// The default selected color (the last entry, black).
    pub fn default_entry(&self) -> PaletteEntry {
        *self.entries.last().expect("palette is never empty")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::music::NoteName;

    #[test]
    fn ten_distinct_colors() {
        let palette = Palette::new();
        assert_eq!(palette.len(), 10);
        for (i, a) in palette.entries().enumerate() {
            for b in palette.entries().skip(i + 1) {
                assert_ne!(a.color, b.color);
            }
        }
    }

    #[test]
    fn default_is_black() {
        let palette = Palette::new();
        assert_eq!(palette.default_entry().name, "black");
    }

    #[test]
    fn notes_track_indices() {
        let palette = Palette::new();
        assert_eq!(palette.get(0).unwrap().note, NoteName::C.in_octave(4));
        assert_eq!(palette.get(9).unwrap().note, NoteName::E.in_octave(5));
    }
}
