mod basic_estimator;
mod deviation_estimator;
mod estimator;

pub use basic_estimator::BasicEstimator;
pub use deviation_estimator::DeviationEstimator;
pub use estimator::Estimator;
