//! Typed error hierarchy for tix.
//!
//! Two top-level enums cover the two fallible subsystems:
//! - `BoardError` — the single board fetch
//! - `PrefsError` — the persisted view preferences store

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the board fetch. One request, one failure mode each for
/// transport, HTTP status, and body decoding — there is no retry path.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Failed to reach board endpoint {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Board endpoint {url} returned an error status: {source}")]
    Status {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode board response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Errors from the preferences store.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Failed to read preferences at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write preferences at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed preferences file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}
