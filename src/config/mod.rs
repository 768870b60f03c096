//! Configuration for the replay binary.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, OutputConfig, ReplayConfig};
