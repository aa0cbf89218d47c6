// Reverberator following the freeverb algorithm: a parallel bank of
// damped feedback comb filters followed by a series of all pass filters.
// https://ccrma.stanford.edu/~jos/pasp/Freeverb.html

const GAIN_SCALE: f32 = 0.015;
const DAMPING_SCALE: f32 = 0.4;
const SCALE_ROOM: f32 = 0.28;
const OFFSET_ROOM: f32 = 0.7;
const COMB_BUFFER_SIZES: [usize; 8] =
    [1116, 1188, 1277, 1356, 1422, 1491, 1557, 1617];
const ALL_PASS_BUFFER_SIZES: [usize; 4] = [556, 441, 341, 225];
const ALL_PASS_FEEDBACK: f32 = 0.5;

pub const INITIAL_ROOM_SIZE: f32 = 0.5;
pub const INITIAL_DAMPING: f32 = 0.5;

struct Comb {
    feedback: f32,
    damping: f32,
    filter_store: f32,
    buffer: Vec<f32>,
    index: usize,
}

impl Comb {
    fn new(buffer_size: usize, feedback: f32, damping: f32) -> Self {
        Self {
            feedback,
            damping,
            filter_store: 0.0,
            buffer: vec![0.0; buffer_size],
            index: 0,
        }
    }

    fn process(&mut self, input: f32) -> f32 {
        let output = self.buffer[self.index];
        self.filter_store = (output * (1.0 - self.damping))
            + (self.filter_store * self.damping);
        self.buffer[self.index] = input + (self.filter_store * self.feedback);
        self.index = (self.index + 1) % self.buffer.len();
        output
    }
}

struct AllPass {
    buffer: Vec<f32>,
    index: usize,
}

impl AllPass {
    fn new(buffer_size: usize) -> Self {
        Self {
            buffer: vec![0.0; buffer_size],
            index: 0,
        }
    }

    fn process(&mut self, input: f32) -> f32 {
        let buffered = self.buffer[self.index];
        self.buffer[self.index] = input + (buffered * ALL_PASS_FEEDBACK);
        self.index = (self.index + 1) % self.buffer.len();
        buffered - input
    }
}

fn room_size_to_comb_feedback(room_size: f32) -> f32 {
    (room_size * SCALE_ROOM) + OFFSET_ROOM
}

pub struct Freeverb {
    combs: Vec<Comb>,
    all_passes: Vec<AllPass>,
}

impl Freeverb {
    pub fn new() -> Self {
        let feedback = room_size_to_comb_feedback(INITIAL_ROOM_SIZE);
        let damping = INITIAL_DAMPING * DAMPING_SCALE;
        Self {
            combs: COMB_BUFFER_SIZES
                .iter()
                .map(|&size| Comb::new(size, feedback, damping))
                .collect(),
            all_passes: ALL_PASS_BUFFER_SIZES
                .iter()
                .map(|&size| AllPass::new(size))
                .collect(),
        }
    }

    pub fn set_room_size(&mut self, room_size: f32) {
        let feedback = room_size_to_comb_feedback(room_size);
        for comb in self.combs.iter_mut() {
            comb.feedback = feedback;
        }
    }

    pub fn set_damping(&mut self, damping: f32) {
        for comb in self.combs.iter_mut() {
            comb.damping = damping * DAMPING_SCALE;
        }
    }

    pub fn process(&mut self, input: f32) -> f32 {
        let input = input * GAIN_SCALE;
        let mut out = 0.0;
        for comb in self.combs.iter_mut() {
            out += comb.process(input);
        }
        for all_pass in self.all_passes.iter_mut() {
            out = all_pass.process(out);
        }
        out
    }
}

impl Default for Freeverb {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn impulse_produces_a_tail() {
        let mut reverb = Freeverb::new();
        let mut energy_early = 0.0;
        let mut energy_late = 0.0;
        for i in 0..20_000 {
            let input = if i == 0 { 1.0 } else { 0.0 };
            let out = reverb.process(input);
            if i < 5000 {
                energy_early += out * out;
            } else {
                energy_late += out * out;
            }
        }
        assert!(energy_early > 0.0);
        assert!(energy_late > 0.0);
        assert!(energy_early > energy_late);
    }
}
