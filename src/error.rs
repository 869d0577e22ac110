//! Shared error types for dataset loading, validation, and result export.

use std::io;

/// Errors surfaced by the miner and its I/O adapters.
///
/// Validation failures (`InputFormat`, `Threshold`) are raised before any
/// tree construction begins; the mining computation itself has no error
/// paths.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write results: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid dataset: {0}")]
    InputFormat(String),

    #[error("minimum support threshold must be a positive integer")]
    Threshold,
}
