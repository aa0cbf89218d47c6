pub mod ambience;
pub mod layout;
pub mod music;
pub mod palette;
pub mod progression;
pub mod session;

pub use ambience::{ambience_params, AmbienceParams};
pub use layout::{Layout, Rect};
pub use music::{Note, NoteName, Tempo};
pub use palette::{Palette, PaletteEntry};
pub use session::{CueSink, CueThrottle, PaintTarget, Session, SoundCue};
