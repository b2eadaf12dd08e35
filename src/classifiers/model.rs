use crate::classifiers::LearningError;
use crate::core::attributes::AttributeRef;
use crate::core::dataset::Dataset;
use crate::core::error::DatasetError;
use crate::core::instances::Instance;
use crate::core::value::Value;
use crate::core::views::{DatasetView, DatasetViewExt, IndexedView};
use crate::evaluation::{BasicEstimator, ClassificationEvaluator, Estimator, PerformanceEvaluator};
use std::fmt::Display;

/// A classifier that learns from a view and predicts class values.
///
/// Implementors provide training on an arbitrary view and single-instance
/// classification; dataset and subset variants as well as evaluation are
/// derived from those two.
pub trait Model: Display {
    /// Replaces any previously learned state.
    fn train_model_on_view(
        &mut self,
        view: &dyn DatasetView,
        class_attribute: &AttributeRef,
    ) -> Result<(), LearningError>;

    fn classify(&self, instance: &Instance) -> Result<Value, LearningError>;

    fn train_model(
        &mut self,
        dataset: &Dataset,
        class_attribute: &AttributeRef,
    ) -> Result<(), LearningError> {
        self.train_model_on_view(dataset, class_attribute)
    }

    fn train_model_on_subset(
        &mut self,
        dataset: &Dataset,
        indices: &[usize],
        class_attribute: &AttributeRef,
    ) -> Result<(), LearningError> {
        let subset = IndexedView::new(dataset, indices.to_vec())?;
        self.train_model_on_view(&subset, class_attribute)
    }

    /// Fraction of the view's instances whose class is predicted correctly.
    fn test_model(
        &self,
        view: &dyn DatasetView,
        class_attribute: &AttributeRef,
    ) -> Result<f64, LearningError> {
        if !view.has_instances() {
            return Err(LearningError::EmptyView);
        }
        let mut accuracy = BasicEstimator::default();
        for instance in view.instances() {
            let predicted = self.classify(instance)?;
            let hit = &predicted == instance.value(class_attribute)?;
            accuracy.add(if hit { 1.0 } else { 0.0 });
        }
        Ok(accuracy.estimation())
    }

    fn test_model_on_subset(
        &self,
        dataset: &Dataset,
        indices: &[usize],
        class_attribute: &AttributeRef,
    ) -> Result<f64, LearningError> {
        let subset = IndexedView::new(dataset, indices.to_vec())?;
        self.test_model(&subset, class_attribute)
    }

    /// Feeds every prediction on `view` into a fresh [`ClassificationEvaluator`].
    fn evaluate(
        &self,
        view: &dyn DatasetView,
        class_attribute: &AttributeRef,
    ) -> Result<ClassificationEvaluator, LearningError> {
        if !view.has_instances() {
            return Err(LearningError::EmptyView);
        }
        let mut evaluator = ClassificationEvaluator::new(class_attribute.num_values());
        let class_index = |value: &Value| {
            class_attribute.index_of_value(value).ok_or_else(|| {
                DatasetError::IllegalValue {
                    attribute: class_attribute.name().to_string(),
                    value: value.to_string(),
                }
            })
        };
        for instance in view.instances() {
            let predicted = self.classify(instance)?;
            evaluator.add_result(
                class_index(instance.value(class_attribute)?)?,
                class_index(&predicted)?,
            );
        }
        Ok(evaluator)
    }
}

/// Fails unless `class_attribute` is one of the view's columns.
pub(crate) fn ensure_class_column(
    view: &dyn DatasetView,
    class_attribute: &AttributeRef,
) -> Result<(), DatasetError> {
    if view.attributes().any(|a| a == class_attribute) {
        Ok(())
    } else {
        Err(DatasetError::UnknownAttribute(class_attribute.name().to_string()))
    }
}
