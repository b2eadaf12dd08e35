mod experiment_config;
mod model_choice;

pub use experiment_config::ExperimentConfig;
pub use model_choice::{BoostingForestParams, DecisionTreeParams, ModelChoice, ModelKind};
