//! The event dispatcher: maps pointer and keyboard input onto paint
//! strokes, color selection and sound cues. All state lives in an explicit
//! [`Session`] value; the drawing surface and the synthesizer are reached
//! through trait seams so the dispatch logic can be exercised against
//! recording fakes.

use crate::{
    ambience::{ambience_params, AmbienceParams},
    layout::Layout,
    music::Note,
    palette::{Palette, PaletteEntry},
    progression::{CLEAR_CHORD, PAINT_CUE_NOTES},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rgb_int::Rgb24;
use std::time::Duration;

/// Minimum wall-clock gap between consecutive paint cues.
pub const PAINT_CUE_MIN_INTERVAL: Duration = Duration::from_millis(50);

/// A short discrete sound triggered by a specific user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// A palette square was clicked; plays the note at the same index.
    Select(Note),
    /// A qualifying paint stroke landed; plays a random pentatonic-ish note.
    Paint(Note),
    /// The canvas was cleared; plays a sustained low chord.
    Clear([Note; 3]),
}

/// A surface that paint strokes land on.
pub trait PaintTarget {
    /// Filled circle at `(x, y)`, no outline.
    fn dab(&mut self, x: i32, y: i32, radius: i32, color: Rgb24);
    /// Reset the whole surface to blank white.
    fn clear(&mut self);
}

/// Wherever sound cues end up (normally the synth command channel).
pub trait CueSink {
    fn cue(&mut self, cue: SoundCue);
}

/// Rate limiter for paint cues: compares a monotonic last-fire timestamp
/// against the current time. No timers involved.
#[derive(Debug, Clone, Copy)]
pub struct CueThrottle {
    min_interval: Duration,
    last_fired: Option<Duration>,
}

impl CueThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_fired: None,
        }
    }

    /// True (and records the fire) if at least `min_interval` has elapsed
    /// since the previous fire.
    pub fn try_fire(&mut self, now: Duration) -> bool {
        let allow = match self.last_fired {
            None => true,
            Some(last) => now.saturating_sub(last) > self.min_interval,
        };
        if allow {
            self.last_fired = Some(now);
        }
        allow
    }
}

pub struct Session {
    layout: Layout,
    palette: Palette,
    selected: PaletteEntry,
    paint_count: u64,
    throttle: CueThrottle,
    rng: StdRng,
}

impl Session {
    pub fn new(layout: Layout) -> Self {
        Self::with_rng(layout, StdRng::from_entropy())
    }

    pub fn with_rng(layout: Layout, rng: StdRng) -> Self {
        let palette = Palette::new();
        let selected = palette.default_entry();
        Self {
            layout,
            palette,
            selected,
            paint_count: 0,
            throttle: CueThrottle::new(PAINT_CUE_MIN_INTERVAL),
            rng,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn selected(&self) -> PaletteEntry {
        self.selected
    }

    pub fn paint_count(&self) -> u64 {
        self.paint_count
    }

    /// Current density-derived effect parameters. Pushed to the live synth
    /// every frame whether or not anything changed.
    pub fn ambience_params(&self) -> AmbienceParams {
        ambience_params(self.paint_count, self.layout.area())
    }

    pub fn pointer_down(
        &mut self,
        x: i32,
        y: i32,
        paint: &mut impl PaintTarget,
        cues: &mut impl CueSink,
    ) {
        if let Some(index) = self.layout.palette_index(x, y) {
            if let Some(entry) = self.palette.get(index) {
                self.selected = entry;
                cues.cue(SoundCue::Select(entry.note));
                log::debug!("selected color: {}", entry.name);
            }
        }
        if self.layout.clear_button().contains(x, y) {
            self.clear(paint, cues);
        }
    }

    pub fn pointer_drag(
        &mut self,
        x: i32,
        y: i32,
        now: Duration,
        paint: &mut impl PaintTarget,
        cues: &mut impl CueSink,
    ) {
        if !self.layout.in_paint_region(x) {
            return;
        }
        // The dab always lands; the cue and the density bump are throttled.
        paint.dab(x, y, self.layout.dab_radius, self.selected.color);
        if self.throttle.try_fire(now) {
            self.paint_count += 1;
            let note =
                PAINT_CUE_NOTES[self.rng.gen_range(0..PAINT_CUE_NOTES.len())];
            cues.cue(SoundCue::Paint(note));
        }
    }

    pub fn key_down(
        &mut self,
        ch: char,
        paint: &mut impl PaintTarget,
        cues: &mut impl CueSink,
    ) {
        if ch == 'c' || ch == 'C' {
            self.clear(paint, cues);
        }
    }

    fn clear(&mut self, paint: &mut impl PaintTarget, cues: &mut impl CueSink) {
        paint.clear();
        self.paint_count = 0;
        cues.cue(SoundCue::Clear(CLEAR_CHORD));
        log::debug!("canvas cleared");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::music::NoteName;

    #[derive(Default)]
    struct RecordingSurface {
        dabs: Vec<(i32, i32, Rgb24)>,
        clears: usize,
    }

    impl PaintTarget for RecordingSurface {
        fn dab(&mut self, x: i32, y: i32, _radius: i32, color: Rgb24) {
            self.dabs.push((x, y, color));
        }

        fn clear(&mut self) {
            self.clears += 1;
        }
    }

    #[derive(Default)]
    struct RecordingCues {
        cues: Vec<SoundCue>,
    }

    impl CueSink for RecordingCues {
        fn cue(&mut self, cue: SoundCue) {
            self.cues.push(cue);
        }
    }

    fn session() -> Session {
        Session::with_rng(Layout::new(800, 600, 10), StdRng::seed_from_u64(0))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn palette_click_selects_and_cues() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let mut cues = RecordingCues::default();
        session.pointer_down(10, 25, &mut surface, &mut cues);
        assert_eq!(session.selected().name, "orange");
        assert_eq!(
            cues.cues,
            vec![SoundCue::Select(NoteName::D.in_octave(4))]
        );
        assert!(surface.dabs.is_empty());
    }

    #[test]
    fn click_outside_palette_changes_nothing() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let mut cues = RecordingCues::default();
        session.pointer_down(400, 300, &mut surface, &mut cues);
        assert_eq!(session.selected().name, "black");
        assert!(cues.cues.is_empty());
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn drag_left_of_paint_region_is_a_no_op() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let mut cues = RecordingCues::default();
        session.pointer_drag(35, 300, ms(1000), &mut surface, &mut cues);
        assert!(surface.dabs.is_empty());
        assert_eq!(session.paint_count(), 0);
        assert!(cues.cues.is_empty());
    }

    #[test]
    fn drag_paints_in_selected_color() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let mut cues = RecordingCues::default();
        session.pointer_down(10, 10, &mut surface, &mut cues);
        assert_eq!(session.selected().name, "red");
        session.pointer_drag(400, 300, ms(1000), &mut surface, &mut cues);
        assert_eq!(surface.dabs, vec![(400, 300, Rgb24::new(255, 0, 0))]);
    }

    #[test]
    fn paint_cues_are_throttled_but_dabs_are_not() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let mut cues = RecordingCues::default();
        session.pointer_drag(400, 300, ms(1000), &mut surface, &mut cues);
        session.pointer_drag(401, 300, ms(1040), &mut surface, &mut cues);
        session.pointer_drag(402, 300, ms(1100), &mut surface, &mut cues);
        assert_eq!(surface.dabs.len(), 3);
        assert_eq!(session.paint_count(), 2);
        let paint_cues = cues
            .cues
            .iter()
            .filter(|cue| matches!(cue, SoundCue::Paint(_)))
            .count();
        assert_eq!(paint_cues, 2);
    }

    #[test]
    fn paint_cue_notes_come_from_the_fixed_set() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let mut cues = RecordingCues::default();
        for i in 0..20 {
            session.pointer_drag(
                400,
                300,
                ms(1000 + i * 100),
                &mut surface,
                &mut cues,
            );
        }
        for cue in &cues.cues {
            match cue {
                SoundCue::Paint(note) => {
                    assert!(PAINT_CUE_NOTES.contains(note))
                }
                other => panic!("unexpected cue {:?}", other),
            }
        }
    }

    #[test]
    fn clear_button_resets_paint_count_with_one_cue() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let mut cues = RecordingCues::default();
        session.pointer_drag(400, 300, ms(1000), &mut surface, &mut cues);
        assert_eq!(session.paint_count(), 1);
        cues.cues.clear();
        session.pointer_down(760, 20, &mut surface, &mut cues);
        assert_eq!(session.paint_count(), 0);
        assert_eq!(surface.clears, 1);
        assert_eq!(cues.cues, vec![SoundCue::Clear(CLEAR_CHORD)]);
    }

    #[test]
    fn clear_key_matches_button_behavior() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let mut cues = RecordingCues::default();
        session.key_down('C', &mut surface, &mut cues);
        session.key_down('c', &mut surface, &mut cues);
        session.key_down('x', &mut surface, &mut cues);
        assert_eq!(surface.clears, 2);
        assert_eq!(cues.cues.len(), 2);
    }

    #[test]
    fn ambience_params_track_paint_count() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        let mut cues = RecordingCues::default();
        assert_eq!(session.ambience_params().filter_cutoff_hz, 400.0);
        for i in 0..10 {
            session.pointer_drag(
                400,
                300,
                ms(1000 + i * 100),
                &mut surface,
                &mut cues,
            );
        }
        assert!(session.ambience_params().filter_cutoff_hz > 400.0);
        session.key_down('c', &mut surface, &mut cues);
        assert_eq!(session.ambience_params().filter_cutoff_hz, 400.0);
    }
}
