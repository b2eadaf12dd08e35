mod experiment;
mod train_test_evaluator;

pub use experiment::Experiment;
pub use train_test_evaluator::{TrainTestEvaluator, train_and_test_model};
