pub struct LowPassFilter {
    alpha: f64,
    last: Option<f64>,
}

impl LowPassFilter {
    pub fn new(tau: f64, dt: f64) -> Self {
        Self {
            alpha: dt / (tau + dt),
            last: None,
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn get(&self) -> Option<f64> {
        self.last
    }

    pub fn update(&mut self, value: f64) -> f64 {
        let filtered = match self.last {
            Some(prev) => self.alpha * value + (1.0 - self.alpha) * prev,
            None => value,
        };
        self.last = Some(filtered);
        filtered
    }
}

#[cfg(test)]
mod lowpass_tests {
    use super::*;

    fn ripple(tau: f64) -> f64 {
        let mut filter = LowPassFilter::new(tau, 0.02);
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;

        for i in 0..2000 {
            let out = filter.update(if i % 2 == 0 { 1.0 } else { -1.0 });
            if i >= 1000 {
                lo = lo.min(out);
                hi = hi.max(out);
            }
        }

        hi - lo
    }

    #[test]
    fn first_sample_passes_through() {
        let mut filter = LowPassFilter::new(0.5, 0.02);
        assert_eq!(filter.get(), None);
        assert_eq!(filter.update(7.5), 7.5, "first sample unchanged");

        let second = filter.update(0.0);
        let alpha = 0.02 / 0.52;
        assert!((second - (1.0 - alpha) * 7.5).abs() < 1e-12);
    }

    #[test]
    fn converges_to_constant_input() {
        let mut filter = LowPassFilter::new(0.5, 0.02);
        filter.update(0.0);

        let mut out = 0.0;
        for _ in 0..1000 {
            out = filter.update(12.0);
        }
        assert!((out - 12.0).abs() < 1e-6, "filter settled at {out}");
    }

    #[test]
    fn zero_tau_is_passthrough() {
        let mut filter = LowPassFilter::new(0.0, 0.02);
        filter.update(1.0);
        assert_eq!(filter.update(4.0), 4.0);
    }

    #[test]
    fn attenuation_grows_with_tau() {
        let fast = ripple(0.01);
        let medium = ripple(0.1);
        let slow = ripple(1.0);

        assert!(fast > medium, "{fast} > {medium}");
        assert!(medium > slow, "{medium} > {slow}");
        assert!(fast < 2.0, "any tau attenuates an alternating input");
    }

    #[test]
    fn reset_forgets_history() {
        let mut filter = LowPassFilter::new(0.5, 0.02);
        filter.update(10.0);
        filter.update(10.0);
        filter.reset();

        assert_eq!(filter.get(), None);
        assert_eq!(filter.update(2.0), 2.0, "reseeded from next sample");
    }
}
