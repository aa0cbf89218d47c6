pub mod delay;
pub mod engine;
pub mod envelope;
pub mod low_level;
pub mod oscillator;
pub mod sequencer;
pub mod voice;

pub use engine::{Command, Engine};
pub use envelope::{Adsr, AdsrLinear01};
pub use oscillator::{Oscillator, Waveform};
pub use sequencer::{AmbientSequencer, NoteEvent};
pub use voice::VoiceBank;
