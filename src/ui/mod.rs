//! Application edge: configuration, command line parsing and the builders
//! that turn a configuration into a runnable [`Experiment`](crate::tasks::Experiment).

pub mod build;
pub mod cli;
pub mod config;
