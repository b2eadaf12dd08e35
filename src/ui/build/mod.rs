mod error;
mod models;

pub use error::BuildError;
pub use models::{build_model, describe_model};

use crate::loaders::load_from_file;
use crate::tasks::{Experiment, TrainTestEvaluator};
use crate::ui::config::ExperimentConfig;
use anyhow::{Context, Result};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Validates `config`, loads its dataset and assembles the experiment.
pub fn build_experiment(config: &ExperimentConfig) -> Result<Experiment> {
    config.validate()?;
    let dataset = load_from_file(&config.dataset_path)
        .with_context(|| format!("cannot load dataset {}", config.dataset_path.display()))?;
    let model = build_model(config.model, config.seed)?;
    let evaluator = TrainTestEvaluator::new(config.training_ratio, config.repeats)?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!("experiment: {} on '{}'", config.model.kind(), dataset.name());

    let mut experiment = Experiment::new(dataset, model, evaluator, rng);
    for (label, value) in describe_model(&config.model) {
        experiment = experiment.with_summary_line(label, value);
    }
    Ok(experiment)
}
