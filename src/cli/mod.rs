pub mod commands;
pub mod serve;
pub mod seed;
pub mod query;

pub use commands::{Cli, Commands};
