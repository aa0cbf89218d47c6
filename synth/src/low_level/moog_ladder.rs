// Moog ladder low pass filter after the Oberheim Variation Model. Based on
// a reference implementation by Will Pirkle:
// https://github.com/ddiakopoulos/MoogLadders/blob/master/src/OberheimVariationModel.h

use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, Default)]
struct OnePole {
    alpha: f32,
    beta: f32,
    z1: f32,
}

impl OnePole {
    fn feedback_output(&self) -> f32 {
        self.beta * self.z1
    }

    fn tick(&mut self, s: f32) -> f32 {
        let vn = (s - self.z1) * self.alpha;
        let out = vn + self.z1;
        self.z1 = vn + out;
        out
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MoogLadderLowPass {
    poles: [OnePole; 4],
    k: f32,
    gamma: f32,
    alpha0: f32,
    saturation: f32,
    cutoff_hz: f32,
    resonance_01: f32,
    sample_rate_hz: f32,
}

impl MoogLadderLowPass {
    pub fn new(sample_rate_hz: f32, cutoff_hz: f32, resonance_01: f32) -> Self {
        let mut filter = Self {
            poles: [OnePole::default(); 4],
            k: 0.0,
            gamma: 0.0,
            alpha0: 1.0,
            saturation: 1.0,
            cutoff_hz: 0.0,
            resonance_01: -1.0,
            sample_rate_hz,
        };
        filter.set_resonance(resonance_01);
        filter.set_cutoff_hz(cutoff_hz);
        filter
    }

    pub fn cutoff_hz(&self) -> f32 {
        self.cutoff_hz
    }

    pub fn set_cutoff_hz(&mut self, cutoff_hz: f32) {
        let cutoff_hz = cutoff_hz.max(0.0);
        if cutoff_hz == self.cutoff_hz {
            return;
        }
        self.cutoff_hz = cutoff_hz;
        // prewarp for the bilinear transform
        let wd = 2.0 * PI * cutoff_hz;
        let t = 1.0 / self.sample_rate_hz;
        let wa = (2.0 / t) * (wd * t / 2.0).tan();
        let g = wa * t / 2.0;
        let ff = g / (1.0 + g);
        for pole in self.poles.iter_mut() {
            pole.alpha = ff;
        }
        self.poles[0].beta = (ff * ff * ff) / (1.0 + g);
        self.poles[1].beta = (ff * ff) / (1.0 + g);
        self.poles[2].beta = ff / (1.0 + g);
        self.poles[3].beta = 1.0 / (1.0 + g);
        self.gamma = ff * ff * ff * ff;
        self.alpha0 = 1.0 / (1.0 + (self.k * self.gamma));
    }

    pub fn set_resonance(&mut self, resonance_01: f32) {
        if resonance_01 == self.resonance_01 {
            return;
        }
        self.resonance_01 = resonance_01;
        self.k = resonance_01 * 4.0;
        self.alpha0 = 1.0 / (1.0 + (self.k * self.gamma));
    }

    pub fn process(&mut self, sample: f32) -> f32 {
        let sigma: f32 =
            self.poles.iter().map(OnePole::feedback_output).sum();
        let sample = sample * (1.0 + self.k);
        let u = (sample - (self.k * sigma)) * self.alpha0;
        let mut stage = (self.saturation * u).tanh();
        for pole in self.poles.iter_mut() {
            stage = pole.tick(stage);
        }
        stage
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn passes_dc() {
        let mut filter = MoogLadderLowPass::new(44_100.0, 1000.0, 0.0);
        let mut out = 0.0;
        for _ in 0..44_100 {
            out = filter.process(0.5);
        }
        assert!((out - 0.5).abs() < 0.05);
    }

    #[test]
    fn attenuates_above_cutoff() {
        // 100Hz cutoff, 5kHz input tone
        let mut filter = MoogLadderLowPass::new(44_100.0, 100.0, 0.0);
        let mut peak = 0.0_f32;
        for i in 0..44_100 {
            let t = i as f32 / 44_100.0;
            let input = (t * 5000.0 * 2.0 * PI).sin();
            let out = filter.process(input);
            if i > 22_050 {
                peak = peak.max(out.abs());
            }
        }
        assert!(peak < 0.05);
    }
}
