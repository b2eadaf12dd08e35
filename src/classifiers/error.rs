use crate::core::error::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LearningError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("cannot learn from or evaluate on an empty view")]
    EmptyView,

    /// The instance carries a value for which the tree has no branch.
    #[error("no branch for value '{value}' of attribute '{attribute}'")]
    MissingClassificationPath { attribute: String, value: String },

    #[error("model has not been trained")]
    NotTrained,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
