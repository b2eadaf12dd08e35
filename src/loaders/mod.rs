//! Readers that turn files into in-memory [`Dataset`](crate::core::Dataset)s.

pub mod arff;

pub use arff::{load_from_file, parse_arff};
