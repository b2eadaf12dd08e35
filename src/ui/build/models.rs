use crate::classifiers::{BoostingForestModel, DecisionTreeModel, Model};
use crate::ui::build::BuildError;
use crate::ui::config::{BoostingForestParams, DecisionTreeParams, ModelChoice};

impl From<DecisionTreeParams> for DecisionTreeModel {
    fn from(p: DecisionTreeParams) -> Self {
        match p.max_depth {
            Some(depth) => DecisionTreeModel::with_max_depth(depth),
            None => DecisionTreeModel::new(),
        }
    }
}

impl TryFrom<BoostingForestParams> for BoostingForestModel {
    type Error = BuildError;

    fn try_from(p: BoostingForestParams) -> Result<Self, Self::Error> {
        if p.iterations == 0 {
            return Err(BuildError::InvalidParameter(
                "boosting iterations must be at least 1".into(),
            ));
        }
        Ok(BoostingForestModel::new(p.iterations, p.max_depth))
    }
}

/// The forest's own generator is derived from `seed` when one is given.
pub fn build_model(choice: ModelChoice, seed: Option<u64>) -> Result<Box<dyn Model>, BuildError> {
    match choice {
        ModelChoice::DecisionTree(p) => Ok(Box::new(DecisionTreeModel::from(p))),
        ModelChoice::BoostingForest(p) => {
            let forest = BoostingForestModel::try_from(p)?;
            Ok(Box::new(match seed {
                Some(seed) => forest.with_seed(seed.wrapping_add(1)),
                None => forest,
            }))
        }
    }
}

/// `label: value` lines describing the model's hyperparameters.
pub fn describe_model(choice: &ModelChoice) -> Vec<(&'static str, String)> {
    match choice {
        ModelChoice::DecisionTree(p) => match p.max_depth {
            Some(depth) => vec![("MaxDepth", depth.to_string())],
            None => Vec::new(),
        },
        ModelChoice::BoostingForest(p) => vec![
            ("Boosting Iterations", p.iterations.to_string()),
            ("MaxDepth", p.max_depth.to_string()),
        ],
    }
}
