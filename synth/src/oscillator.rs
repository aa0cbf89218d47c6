#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
    Triangle,
    Pulse,
}

/// Single phase-accumulating oscillator. Phase is kept in the unit
/// interval and advanced by `freq / sample_rate` each tick.
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    pub waveform: Waveform,
    pub freq_hz: f32,
    state_01: f32,
}

impl Oscillator {
    pub fn new(waveform: Waveform, freq_hz: f32) -> Self {
        Self {
            waveform,
            freq_hz,
            state_01: 0.0,
        }
    }

    pub fn tick(&mut self, sample_rate_hz: f32) -> f32 {
        self.state_01 =
            (self.state_01 + self.freq_hz / sample_rate_hz).rem_euclid(1.0);
        match self.waveform {
            Waveform::Sine => {
                (self.state_01 * std::f32::consts::PI * 2.0).sin()
            }
            Waveform::Saw => (self.state_01 * 2.0) - 1.0,
            Waveform::Triangle => {
                (((self.state_01 * 2.0) - 1.0).abs() * 2.0) - 1.0
            }
            Waveform::Pulse => {
                if self.state_01 < 0.5 {
                    -1.0
                } else {
                    1.0
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn output_stays_in_range() {
        for waveform in
            [Waveform::Sine, Waveform::Saw, Waveform::Triangle, Waveform::Pulse]
        {
            let mut osc = Oscillator::new(waveform, 440.0);
            for _ in 0..10_000 {
                let sample = osc.tick(44_100.0);
                assert!((-1.0..=1.0).contains(&sample));
            }
        }
    }

    #[test]
    fn triangle_period_matches_frequency() {
        // 100Hz at 10kHz sample rate: one full period every 100 ticks
        let mut osc = Oscillator::new(Waveform::Triangle, 100.0);
        let first: Vec<f32> = (0..100).map(|_| osc.tick(10_000.0)).collect();
        let second: Vec<f32> = (0..100).map(|_| osc.tick(10_000.0)).collect();
        for (a, b) in first.iter().zip(second.iter()) {
            assert!((a - b).abs() < 1e-3);
        }
    }
}
