use crate::evaluation::estimators::Estimator;

/// Running mean and population standard deviation (Welford's update).
#[derive(Debug, Default, Clone, Copy)]
pub struct DeviationEstimator {
    len: usize,
    mean: f64,
    m2: f64,
}

impl DeviationEstimator {
    /// Population standard deviation (divides by `len`); `NaN` when empty.
    pub fn deviation(&self) -> f64 {
        if self.len == 0 {
            return f64::NAN;
        }
        (self.m2 / self.len as f64).max(0.0).sqrt()
    }
}

impl Estimator for DeviationEstimator {
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        let delta = v - self.mean;
        self.mean += delta / self.len as f64;
        self.m2 += delta * (v - self.mean);
    }

    fn estimation(&self) -> f64 {
        if self.len > 0 { self.mean } else { f64::NAN }
    }

    fn len(&self) -> usize {
        self.len
    }
}
