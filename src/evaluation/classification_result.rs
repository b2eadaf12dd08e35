use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Summary of repeated train/test trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// Mean accuracy over all trials.
    pub mean: f64,
    /// Population standard deviation of the per-trial accuracies.
    pub deviation: f64,
}

impl Display for ClassificationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "mean accuracy {:.4} (deviation {:.4})", self.mean, self.deviation)
    }
}
