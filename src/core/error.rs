//! Error types for bonsai generation

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid direction ({x}, {z}): components must be -1, 0 or 1")]
    InvalidDirection { x: i32, z: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bonsai data version mismatch: expected {expected}, got {found}")]
    VersionMismatch { expected: u32, found: u32 },
}
