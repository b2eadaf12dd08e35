pub mod attributes;
pub mod dataset;
pub mod error;
pub mod instance_header;
pub mod instances;
pub mod value;
pub mod views;

pub use dataset::{Dataset, DatasetSplit};
pub use error::DatasetError;
pub use value::Value;
