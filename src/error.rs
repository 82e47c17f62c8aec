use std::path::PathBuf;
use thiserror::Error;

use crate::model::Verb;

/// Failures while reading or checking a manifest. All of them end the run.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest '{}' is not a list of load instructions", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("instruction {position} ('{api}') uses the {verb} verb, which has no handler")]
    UnsupportedVerb {
        position: usize,
        api: String,
        verb: Verb,
    },
}

/// Failures while replaying a single load instruction.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not find file '{}'.", path.display())]
    FileMissing { path: PathBuf },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not a JSON array of records", path.display())]
    SourceFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{path}' is not a valid resource path: {reason}")]
    InvalidPath { path: String, reason: String },

    /// Non-success status returned by the API
    #[error("{status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("request to '{path}' failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("the {0} verb has no handler")]
    UnsupportedVerb(Verb),
}

impl LoadError {
    /// Whether the run may log this error and carry on with the next instruction.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LoadError::FileMissing { .. } | LoadError::Http { .. } | LoadError::Transport { .. }
        )
    }
}
