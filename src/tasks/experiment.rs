use crate::classifiers::Model;
use crate::core::dataset::Dataset;
use crate::core::views::DatasetView;
use crate::evaluation::{ClassificationResult, PerformanceEvaluator};
use crate::tasks::TrainTestEvaluator;
use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use std::io::Write;

/// One holdout run followed by repeated trials, reported as text.
pub struct Experiment {
    dataset: Dataset,
    model: Box<dyn Model>,
    model_summary: Vec<(String, String)>,
    evaluator: TrainTestEvaluator,
    rng: StdRng,
}

impl Experiment {
    pub fn new(
        dataset: Dataset,
        model: Box<dyn Model>,
        evaluator: TrainTestEvaluator,
        rng: StdRng,
    ) -> Self {
        Self {
            dataset,
            model,
            model_summary: Vec::new(),
            evaluator,
            rng,
        }
    }

    /// Extra `label: value` lines printed after the dataset name.
    pub fn with_summary_line<L: Into<String>, V: ToString>(mut self, label: L, value: V) -> Self {
        self.model_summary.push((label.into(), value.to_string()));
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Trains on a single random split, prints both partitions, the model
    /// and its holdout scores, then runs the repeated trials.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<ClassificationResult> {
        let class = self
            .dataset
            .last_attribute()
            .context("dataset has no class attribute")?
            .clone();
        let split = self
            .dataset
            .random_split(self.evaluator.training_ratio(), &mut self.rng)
            .context("failed to split dataset")?;

        writeln!(out, "Dataset: {}", self.dataset.name())?;
        writeln!(out)?;
        writeln!(out, "Training set:")?;
        writeln!(out, "{}", split.training_set)?;
        writeln!(out)?;
        writeln!(out, "Test set:")?;
        writeln!(out, "{}", split.test_set)?;
        writeln!(out)?;

        self.model
            .train_model_on_view(&split.training_set, &class)
            .context("training failed")?;
        writeln!(out, "{}", self.model)?;
        writeln!(out)?;

        let accuracy = self
            .model
            .test_model(&split.test_set, &class)
            .context("testing failed")?;
        let holdout = self
            .model
            .evaluate(&split.test_set, &class)
            .context("testing failed")?;

        writeln!(out, "Dataset: {}", self.dataset.name())?;
        for (label, value) in &self.model_summary {
            writeln!(out, "{label}: {value}")?;
        }
        writeln!(out, "Size of training set: {}", split.training_set.num_instances())?;
        writeln!(out, "Size of test set: {}", split.test_set.num_instances())?;
        writeln!(out, "Correctly classified: {accuracy}")?;
        for measurement in holdout.performance() {
            writeln!(out, "{measurement}")?;
        }

        info!(
            "running {} trials at training ratio {:.4}",
            self.evaluator.repeats(),
            self.evaluator.training_ratio()
        );
        let result = self
            .evaluator
            .run(self.model.as_mut(), &self.dataset, &class, &mut self.rng)
            .context("repeated trials failed")?;
        writeln!(out, "{result}")?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::DecisionTreeModel;
    use crate::testing::dummies::weather_dataset;
    use rand::SeedableRng;

    #[test]
    fn test_report_lists_every_section() {
        let evaluator = TrainTestEvaluator::new(2.0 / 3.0, 4).unwrap();
        let mut experiment = Experiment::new(
            weather_dataset(),
            Box::new(DecisionTreeModel::new()),
            evaluator,
            StdRng::seed_from_u64(11),
        )
        .with_summary_line("MaxDepth", "unbounded");

        let mut out = Vec::new();
        let result = experiment.run(&mut out).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.starts_with("Dataset: weather.symbolic\n\nTraining set:\n"));
        for needle in [
            "Test set:",
            "MaxDepth: unbounded",
            "Size of training set: 10",
            "Size of test set: 4",
            "Correctly classified: ",
            "accuracy: ",
            "kappa: ",
            "mean accuracy ",
        ] {
            assert!(report.contains(needle), "missing '{needle}' in report");
        }
        assert!((0.0..=1.0).contains(&result.mean));
    }
}
