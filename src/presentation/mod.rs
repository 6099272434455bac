pub mod cli;
pub mod config;

pub use cli::{Cli, RunMode};
pub use self::config::{ConfigurationError, Settings};
