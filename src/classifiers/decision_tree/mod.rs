mod classifier;
mod decision_tree_model;
mod node;
mod tree_string_builder;

pub use classifier::Classifier;
pub use decision_tree_model::DecisionTreeModel;
pub use node::{InnerNode, Leaf, Node};
