pub mod classifiers;
pub mod core;
pub mod evaluation;
pub mod loaders;
pub mod sampling;
pub mod tasks;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
