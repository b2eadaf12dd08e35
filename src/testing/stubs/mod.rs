pub mod oracle_model;

pub use oracle_model::OracleModel;
