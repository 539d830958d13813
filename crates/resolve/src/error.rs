//! Failures at the resolver boundary.

use thiserror::Error;

/// Why a lookup fell back to the chembl-only result.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Connection failure, or the body could not be read
    #[error("UniChem request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status; the body is kept verbatim
    #[error("[STATUS CODE - {status}]\t{body}")]
    Status { status: u16, body: String },

    /// Body was not an array of string maps
    #[error("Failed to parse UniChem response: {0}")]
    Parse(#[from] serde_json::Error),
}
