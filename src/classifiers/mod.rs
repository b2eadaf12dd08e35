pub mod boosting;
pub mod decision_tree;
mod error;
pub mod measures;
mod model;

pub use boosting::BoostingForestModel;
pub use decision_tree::DecisionTreeModel;
pub use error::LearningError;
pub use model::Model;
