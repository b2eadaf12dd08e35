use crate::evaluation::estimators::Estimator;

/// Running mean: `sum / len`.
///
/// Used for accuracies, where every observation is a 0/1 hit indicator.
/// `NaN` observations are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: usize,
    sum: f64,
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.sum / self.len as f64
        } else {
            f64::NAN
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_hit_indicators() {
        let mut e = BasicEstimator::default();
        assert!(e.estimation().is_nan());
        for hit in [1.0, 0.0, 1.0, 1.0] {
            e.add(hit);
        }
        e.add(f64::NAN);
        assert_eq!(e.len(), 4);
        assert!((e.estimation() - 0.75).abs() < 1e-12);
    }
}
