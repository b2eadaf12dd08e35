//! Stateless index selection: uniform train/test splits and weighted
//! bootstrap resampling. The random generator is always supplied by the
//! caller.

mod bootstrap;
mod interval;
mod selection;

pub use bootstrap::{distribution_from_weights, weighted_bootstrap};
pub use interval::Interval;
pub use selection::{Split, random_split};
