use crate::ui::config::ModelChoice;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_training_ratio() -> f64 {
    2.0 / 3.0
}

fn default_repeats() -> usize {
    10
}

/// Everything needed to run one experiment, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub dataset_path: PathBuf,

    #[serde(default = "default_training_ratio")]
    pub training_ratio: f64,

    #[serde(default = "default_repeats")]
    pub repeats: usize,

    /// `None` seeds from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub model: ModelChoice,
}

impl ExperimentConfig {
    pub fn new<P: Into<PathBuf>>(dataset_path: P, model: ModelChoice) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            training_ratio: default_training_ratio(),
            repeats: default_repeats(),
            seed: None,
            model,
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: ExperimentConfig =
            serde_json::from_str(text).context("invalid experiment configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.repeats == 0 {
            bail!("repeats must be at least 1");
        }
        if !(self.training_ratio > 0.0 && self.training_ratio < 1.0) {
            bail!("training_ratio must be in (0, 1), got {}", self.training_ratio);
        }
        if let ModelChoice::BoostingForest(params) = &self.model {
            if params.iterations == 0 {
                bail!("boosting iterations must be at least 1");
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("cannot serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::config::{BoostingForestParams, DecisionTreeParams};
    use std::io::Write;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = ExperimentConfig::from_json_str(r#"{"dataset_path": "weather.arff"}"#).unwrap();
        assert_eq!(config.dataset_path, PathBuf::from("weather.arff"));
        assert!((config.training_ratio - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(config.repeats, 10);
        assert_eq!(config.seed, None);
        assert_eq!(config.model, ModelChoice::DecisionTree(DecisionTreeParams::default()));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad = [
            r#"{"dataset_path": "d.arff", "repeats": 0}"#,
            r#"{"dataset_path": "d.arff", "training_ratio": 1.0}"#,
            r#"{"dataset_path": "d.arff", "training_ratio": 0.0}"#,
            r#"{"dataset_path": "d.arff", "model": {"type": "boosting-forest", "params": {"iterations": 0, "max_depth": 2}}}"#,
            r#"{"dataset_path": "d.arff", "model": {"type": "random-forest", "params": {}}}"#,
        ];
        for text in bad {
            assert!(ExperimentConfig::from_json_str(text).is_err(), "accepted {text}");
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut config = ExperimentConfig::new(
            "data/weather.arff",
            ModelChoice::BoostingForest(BoostingForestParams {
                iterations: 7,
                max_depth: 1,
            }),
        );
        config.seed = Some(99);
        config.training_ratio = 0.75;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_json_pretty().unwrap().as_bytes())
            .unwrap();
        assert_eq!(ExperimentConfig::load(file.path()).unwrap(), config);
    }

    #[test]
    fn test_missing_config_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ExperimentConfig::load(dir.path().join("none.json")).is_err());
    }
}
