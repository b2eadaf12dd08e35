mod args;

pub use args::{Command, parse_args, usage};
