// Exponentially weighted moving average whose weight decays with elapsed
// simulated time rather than with sample count.
// https://en.wikipedia.org/wiki/Moving_average#Application_to_measuring_computer_performance
pub struct TimeWindowedEwma {
    estimate: f64,
    window_len: f64,
    last_event_time: f64,
}

impl TimeWindowedEwma {
    pub fn new(window_len: f64) -> Self {
        TimeWindowedEwma {
            estimate: 0.,
            window_len,
            last_event_time: 0.,
        }
    }

    pub fn update(&mut self, time: f64, value: f64) -> f64 {
        let alpha = 1. - (-(time - self.last_event_time) / self.window_len).exp();
        self.estimate = (1. - alpha) * self.estimate + alpha * value;
        self.last_event_time = time;
        self.estimate
    }

    pub fn current(&self) -> f64 {
        self.estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forgets_after_a_long_gap() {
        let mut ewma = TimeWindowedEwma::new(1.);
        ewma.update(1., 10.);
        // Many windows later, the old level is essentially gone.
        let est = ewma.update(100., 2.);
        assert!((est - 2.).abs() < 1e-9, "estimate {}", est);
    }

    #[test]
    fn close_samples_barely_move_the_estimate() {
        let mut ewma = TimeWindowedEwma::new(1000.);
        ewma.update(1., 0.);
        let est = ewma.update(1.001, 100.);
        assert!(est < 1., "estimate {}", est);
    }
}
