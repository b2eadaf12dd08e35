use crate::evaluation::{BasicEstimator, Estimator, Measurement, PerformanceEvaluator};

/// Holdout evaluator reporting accuracy and Cohen's kappa.
///
/// Kappa compares the observed accuracy with the agreement expected by
/// chance given the marginals of the true (`row_kappa`) and predicted
/// (`col_kappa`) classes.
#[derive(Debug, Clone)]
pub struct ClassificationEvaluator<E: Estimator + Default = BasicEstimator> {
    weight_correct: E,
    row_kappa: Vec<E>,
    col_kappa: Vec<E>,
    num_classes: usize,
}

impl<E: Estimator + Default> ClassificationEvaluator<E> {
    pub fn new(num_classes: usize) -> Self {
        let make_vec = || (0..num_classes).map(|_| E::default()).collect::<Vec<_>>();
        Self {
            weight_correct: E::default(),
            row_kappa: make_vec(),
            col_kappa: make_vec(),
            num_classes,
        }
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    fn kappa(&self) -> f64 {
        if self.weight_correct.is_empty() {
            return 0.0;
        }
        let p_o = self.weight_correct.estimation();
        let p_e: f64 = self
            .row_kappa
            .iter()
            .zip(&self.col_kappa)
            .map(|(t, p)| t.estimation() * p.estimation())
            .filter(|x| x.is_finite())
            .sum();
        let denom = 1.0 - p_e;
        if denom.abs() > f64::EPSILON {
            (p_o - p_e) / denom
        } else {
            f64::NAN
        }
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for ClassificationEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new(self.num_classes);
    }

    fn add_result(&mut self, true_class: usize, predicted_class: usize) {
        if true_class >= self.num_classes || predicted_class >= self.num_classes {
            return;
        }
        self.weight_correct
            .add(if true_class == predicted_class { 1.0 } else { 0.0 });
        for (c, est) in self.row_kappa.iter_mut().enumerate() {
            est.add(if c == true_class { 1.0 } else { 0.0 });
        }
        for (c, est) in self.col_kappa.iter_mut().enumerate() {
            est.add(if c == predicted_class { 1.0 } else { 0.0 });
        }
    }

    fn performance(&self) -> Vec<Measurement> {
        vec![
            Measurement::new("accuracy", self.weight_correct.estimation()),
            Measurement::new("kappa", self.kappa()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::PerformanceEvaluatorExt;

    type Eval = ClassificationEvaluator<BasicEstimator>;

    #[test]
    fn test_perf_when_empty() {
        let ev = Eval::new(2);
        assert!(ev.metric("accuracy").unwrap().is_nan());
        assert_eq!(ev.metric("kappa"), Some(0.0));
        assert_eq!(ev.metric("log_loss"), None);
    }

    #[test]
    fn test_kappa_one_when_perfect_on_balanced() {
        let mut ev = Eval::new(2);
        ev.add_result(0, 0);
        ev.add_result(1, 1);
        assert!((ev.metric("accuracy").unwrap() - 1.0).abs() < 1e-12);
        assert!((ev.metric("kappa").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_kappa_zero_when_accuracy_equals_chance() {
        let mut ev = Eval::new(2);
        ev.add_result(0, 1);
        ev.add_result(1, 1);
        assert!((ev.metric("accuracy").unwrap() - 0.5).abs() < 1e-12);
        assert!(ev.metric("kappa").unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_classes_are_ignored() {
        let mut ev = Eval::new(2);
        ev.add_result(5, 0);
        ev.add_result(1, 1);
        assert!((ev.metric("accuracy").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset_clears_metrics() {
        let mut ev = Eval::new(3);
        ev.add_result(2, 2);
        ev.reset();
        assert!(ev.metric("accuracy").unwrap().is_nan());
        assert_eq!(ev.num_classes(), 3);
    }
}
