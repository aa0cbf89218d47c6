pub mod freeverb;
pub mod moog_ladder;
