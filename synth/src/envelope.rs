/// Envelope parameters, matching the attack/decay/sustain/release shape of
/// the usual subtractive-synth amplitude envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adsr {
    pub attack_s: f32,
    pub decay_s: f32,
    pub sustain_01: f32,
    pub release_s: f32,
}

/// Piecewise-linear ADSR envelope generator producing values in the unit
/// interval. The decay phase begins once the attack ramp has crossed 1.
#[derive(Debug, Clone, Copy)]
pub struct AdsrLinear01 {
    adsr: Adsr,
    current: f32,
    crossed_threshold: bool,
}

impl AdsrLinear01 {
    pub fn new(adsr: Adsr) -> Self {
        Self {
            adsr,
            current: 0.0,
            crossed_threshold: false,
        }
    }

    pub fn tick(&mut self, gate: bool, sample_rate_hz: f32) -> f32 {
        if gate {
            if self.crossed_threshold {
                // decay and sustain
                self.current = (self.current
                    - (1.0 / (self.adsr.decay_s * sample_rate_hz)))
                    .max(self.adsr.sustain_01);
            } else {
                // attack
                self.current = (self.current
                    + (1.0 / (self.adsr.attack_s * sample_rate_hz)))
                    .min(1.0);
                if self.current == 1.0 {
                    self.crossed_threshold = true;
                }
            }
        } else {
            // release
            self.crossed_threshold = false;
            self.current = (self.current
                - (1.0 / (self.adsr.release_s * sample_rate_hz)))
                .max(0.0);
        }
        self.current
    }

    pub fn is_idle(&self) -> bool {
        self.current == 0.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ADSR: Adsr = Adsr {
        attack_s: 0.1,
        decay_s: 0.1,
        sustain_01: 0.5,
        release_s: 0.1,
    };

    #[test]
    fn attack_ramps_to_one() {
        let mut env = AdsrLinear01::new(ADSR);
        let mut prev = 0.0;
        for _ in 0..99 {
            let value = env.tick(true, 1000.0);
            assert!(value > prev);
            prev = value;
        }
        assert!((env.tick(true, 1000.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn decays_to_sustain_while_gated() {
        let mut env = AdsrLinear01::new(ADSR);
        for _ in 0..500 {
            env.tick(true, 1000.0);
        }
        assert!((env.tick(true, 1000.0) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn releases_to_zero() {
        let mut env = AdsrLinear01::new(ADSR);
        for _ in 0..200 {
            env.tick(true, 1000.0);
        }
        for _ in 0..200 {
            env.tick(false, 1000.0);
        }
        assert!(env.is_idle());
    }
}
