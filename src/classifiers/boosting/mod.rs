mod boosting_forest_model;

pub use boosting_forest_model::{BoostingForestModel, WeightedTree};
