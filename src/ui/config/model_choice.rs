use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTreeParams {
    /// `None` grows the tree until leaves are pure or attributes run out.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostingForestParams {
    pub iterations: usize,
    pub max_depth: usize,
}

impl Default for BoostingForestParams {
    fn default() -> Self {
        Self {
            iterations: 10,
            max_depth: 2,
        }
    }
}

/// Which model an experiment trains, with its hyperparameters.
///
/// Serialized as `{"type": "<kind>", "params": {..}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ModelKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ModelChoice {
    DecisionTree(DecisionTreeParams),
    BoostingForest(BoostingForestParams),
}

impl ModelChoice {
    pub fn kind(&self) -> ModelKind {
        ModelKind::from(self)
    }

    pub fn default_for(kind: ModelKind) -> Self {
        match kind {
            ModelKind::DecisionTree => ModelChoice::DecisionTree(DecisionTreeParams::default()),
            ModelKind::BoostingForest => {
                ModelChoice::BoostingForest(BoostingForestParams::default())
            }
        }
    }
}

impl Default for ModelChoice {
    fn default() -> Self {
        ModelChoice::default_for(ModelKind::DecisionTree)
    }
}
