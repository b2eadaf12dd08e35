use crate::classifiers::{LearningError, Model};
use crate::core::attributes::AttributeRef;
use crate::core::dataset::Dataset;
use crate::core::views::DatasetView;
use crate::evaluation::{ClassificationResult, DeviationEstimator, Estimator};
use log::debug;
use rand::Rng;

/// Repeated random-split evaluation: every trial draws a fresh split,
/// retrains the model on its training part and scores it on the rest.
#[derive(Debug, Clone, Copy)]
pub struct TrainTestEvaluator {
    training_ratio: f64,
    repeats: usize,
}

impl TrainTestEvaluator {
    /// `training_ratio` must lie strictly between 0 and 1 so that both
    /// partitions can be non-empty.
    pub fn new(training_ratio: f64, repeats: usize) -> Result<Self, LearningError> {
        if repeats == 0 {
            return Err(LearningError::InvalidParameter(
                "at least one repetition is required".into(),
            ));
        }
        if !(training_ratio > 0.0 && training_ratio < 1.0) {
            return Err(LearningError::InvalidParameter(format!(
                "training ratio {training_ratio} is not in (0, 1)"
            )));
        }
        Ok(Self {
            training_ratio,
            repeats,
        })
    }

    pub fn training_ratio(&self) -> f64 {
        self.training_ratio
    }

    pub fn repeats(&self) -> usize {
        self.repeats
    }

    pub fn run<M, R>(
        &self,
        model: &mut M,
        dataset: &Dataset,
        class_attribute: &AttributeRef,
        rng: &mut R,
    ) -> Result<ClassificationResult, LearningError>
    where
        M: Model + ?Sized,
        R: Rng + ?Sized,
    {
        let mut accuracy = DeviationEstimator::default();
        for trial in 0..self.repeats {
            let split = dataset.random_split(self.training_ratio, rng)?;
            model.train_model_on_view(&split.training_set, class_attribute)?;
            let trial_accuracy = model.test_model(&split.test_set, class_attribute)?;
            debug!(
                "trial {trial}: {} training / {} test rows, accuracy {trial_accuracy:.4}",
                split.training_set.num_instances(),
                split.test_set.num_instances()
            );
            accuracy.add(trial_accuracy);
        }
        Ok(ClassificationResult {
            mean: accuracy.estimation(),
            deviation: accuracy.deviation(),
        })
    }
}

/// Shorthand for [`TrainTestEvaluator::new`] followed by
/// [`run`](TrainTestEvaluator::run).
pub fn train_and_test_model<M, R>(
    model: &mut M,
    dataset: &Dataset,
    training_ratio: f64,
    repeats: usize,
    class_attribute: &AttributeRef,
    rng: &mut R,
) -> Result<ClassificationResult, LearningError>
where
    M: Model + ?Sized,
    R: Rng + ?Sized,
{
    TrainTestEvaluator::new(training_ratio, repeats)?.run(model, dataset, class_attribute, rng)
}
