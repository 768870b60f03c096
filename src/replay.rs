//! Replaying a newline-delimited JSON action log through a [`FormStore`].

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::form::{FormIntent, FormState};
use crate::store::FormStore;

/// Errors that can occur while replaying an action log.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read action log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid action on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read state snapshot '{path}': {source}")]
    ReadSnapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse state snapshot '{path}': {source}")]
    ParseSnapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid state snapshot '{path}': {message}")]
    InvalidSnapshot { path: PathBuf, message: String },
}

/// Outcome counters of a replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Actions for which the reducer produced a new state. A repeated
    /// overwrite, such as clearing pristine twice, counts here even though
    /// the new state equals the old one by value.
    pub applied: usize,
    /// Actions the reducer ignored (unknown parent or unrecognized kind).
    pub unchanged: usize,
    /// Lines that failed to decode and were skipped.
    pub skipped: usize,
}

/// Feed every non-blank line of `reader` to `store` as one action.
///
/// With `skip_invalid`, undecodable lines are logged and counted; without
/// it the first one aborts the replay. Actions before the failing line stay
/// applied.
pub fn replay<R: BufRead>(
    store: &FormStore,
    reader: R,
    skip_invalid: bool,
) -> Result<ReplayReport, ReplayError> {
    let mut report = ReplayReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let intent = match serde_json::from_str::<FormIntent>(&line) {
            Ok(intent) => intent,
            Err(source) if skip_invalid => {
                tracing::warn!(line = line_no, error = %source, "Skipping invalid action");
                report.skipped += 1;
                continue;
            }
            Err(source) => {
                return Err(ReplayError::Decode {
                    line: line_no,
                    source,
                })
            }
        };

        if store.dispatch(intent) {
            report.applied += 1;
        } else {
            report.unchanged += 1;
        }
    }

    tracing::info!(
        applied = report.applied,
        unchanged = report.unchanged,
        skipped = report.skipped,
        "Replay finished"
    );
    Ok(report)
}

/// Load a JSON state snapshot, as printed by a previous replay.
///
/// Every form, group and input must be stored under its own identifier.
pub fn load_snapshot(path: &Path) -> Result<FormState, ReplayError> {
    let content = fs::read_to_string(path).map_err(|source| ReplayError::ReadSnapshot {
        path: path.to_path_buf(),
        source,
    })?;
    let state: FormState =
        serde_json::from_str(&content).map_err(|source| ReplayError::ParseSnapshot {
            path: path.to_path_buf(),
            source,
        })?;
    if let Some(message) = state.find_key_mismatch() {
        return Err(ReplayError::InvalidSnapshot {
            path: path.to_path_buf(),
            message,
        });
    }
    Ok(state)
}
