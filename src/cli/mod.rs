//! Command-line interface module.

mod args;
pub mod generate;
pub mod query;

pub use args::{Cli, Commands, QueryArgs};
