use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub replay: ReplayConfig,
}

/// How the final state is printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print the JSON state (default: true).
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

/// How an action log is replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Skip lines that fail to decode instead of aborting (default: true).
    #[serde(default = "default_skip_invalid")]
    pub skip_invalid: bool,
    /// JSON state snapshot to start from. Empty state when unset.
    #[serde(default)]
    pub initial_state: Option<PathBuf>,
}

fn default_pretty() -> bool {
    true
}

fn default_skip_invalid() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            skip_invalid: default_skip_invalid(),
            initial_state: None,
        }
    }
}
