/// Feedback delay line with a fixed period and live-adjustable feedback.
/// Returns only the wet signal; the dry path is mixed by the caller.
#[derive(Debug)]
pub struct FeedbackDelay {
    buffer: Vec<f32>,
    index: usize,
    pub feedback: f32,
    pub wet: f32,
}

impl FeedbackDelay {
    pub fn new(period_s: f32, sample_rate_hz: f32, feedback: f32, wet: f32) -> Self {
        let len = ((period_s * sample_rate_hz) as usize).max(1);
        Self {
            buffer: vec![0.0; len],
            index: 0,
            feedback,
            wet,
        }
    }

    pub fn process(&mut self, input: f32) -> f32 {
        let delayed = self.buffer[self.index];
        self.buffer[self.index] = input + (delayed * self.feedback);
        self.index = (self.index + 1) % self.buffer.len();
        delayed * self.wet
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn echoes_arrive_one_period_apart() {
        // period of 10 samples at 1kHz
        let mut delay = FeedbackDelay::new(0.01, 1000.0, 0.5, 1.0);
        let mut out = Vec::new();
        for i in 0..35 {
            let input = if i == 0 { 1.0 } else { 0.0 };
            out.push(delay.process(input));
        }
        assert_eq!(out[10], 1.0);
        assert_eq!(out[20], 0.5);
        assert_eq!(out[30], 0.25);
        assert!(out[..10].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn wet_scales_output() {
        let mut delay = FeedbackDelay::new(0.01, 1000.0, 0.0, 0.3);
        let mut out = Vec::new();
        for i in 0..11 {
            let input = if i == 0 { 1.0 } else { 0.0 };
            out.push(delay.process(input));
        }
        assert!((out[10] - 0.3).abs() < 1e-6);
    }
}
