mod classification_result;
mod estimators;
mod evaluators;
mod measurement;

pub use classification_result::ClassificationResult;
pub use estimators::{BasicEstimator, DeviationEstimator, Estimator};
pub use evaluators::{ClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
pub use measurement::Measurement;
