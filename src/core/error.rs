use thiserror::Error;

/// Failures raised while building or reading datasets and their views.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("index {index} out of bounds for extent {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A cursor was stepped backwards from its first position.
    #[error("cursor has no previous element")]
    NoPreviousElement,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("attribute '{0}' is not part of this dataset")]
    UnknownAttribute(String),

    #[error("value '{value}' is not allowed for attribute '{attribute}'")]
    IllegalValue { attribute: String, value: String },

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DatasetError {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        DatasetError::IndexOutOfBounds { index, len }
    }

    pub(crate) fn parse<M: Into<String>>(line: usize, message: M) -> Self {
        DatasetError::Parse {
            line,
            message: message.into(),
        }
    }
}
