/// Running sum of valid metrics collected during a calibration window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Calibration {
    sum: f64,
    count: usize,
}

impl Calibration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, metric: f32) {
        self.sum += metric as f64;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the accumulated metrics, `None` if nothing was collected.
    pub fn mean(&self) -> Option<f32> {
        if self.count == 0 {
            None
        } else {
            Some((self.sum / self.count as f64) as f32)
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Take the mean and reset the accumulator.
    pub fn finish(&mut self) -> Option<f32> {
        let mean = self.mean();
        self.clear();
        mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_calibration_has_no_mean() {
        assert_eq!(Calibration::new().mean(), None);
    }

    #[test]
    fn test_finish_clears() {
        let mut calibration = Calibration::new();
        calibration.add(0.2);
        calibration.add(0.4);
        let mean = calibration.finish().unwrap();
        assert!((mean - 0.3).abs() < 1e-6);
        assert_eq!(calibration.count(), 0);
        assert_eq!(calibration.finish(), None);
    }
}
