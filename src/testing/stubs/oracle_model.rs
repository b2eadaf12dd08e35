use crate::classifiers::{LearningError, Model};
use crate::core::attributes::AttributeRef;
use crate::core::instances::Instance;
use crate::core::value::Value;
use crate::core::views::DatasetView;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Predicts the instance's own class value; training is a no-op.
pub struct OracleModel {
    class_attribute: AttributeRef,
    trained_on: usize,
}

impl OracleModel {
    pub fn new(class_attribute: &AttributeRef) -> Self {
        Self {
            class_attribute: Arc::clone(class_attribute),
            trained_on: 0,
        }
    }

    pub fn trained_on(&self) -> usize {
        self.trained_on
    }
}

impl Model for OracleModel {
    fn train_model_on_view(
        &mut self,
        view: &dyn DatasetView,
        class_attribute: &AttributeRef,
    ) -> Result<(), LearningError> {
        self.class_attribute = Arc::clone(class_attribute);
        self.trained_on = view.num_instances();
        Ok(())
    }

    fn classify(&self, instance: &Instance) -> Result<Value, LearningError> {
        Ok(instance.value(&self.class_attribute)?.clone())
    }
}

impl Display for OracleModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "oracle on '{}'", self.class_attribute.name())
    }
}
