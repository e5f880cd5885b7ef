//! Data types for pattern export.

use crate::draw::DrawError;
use thiserror::Error;

/// Errors that can occur while exporting a pattern.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("An export is already in progress")]
    Busy,

    #[error("Failed to encode pattern: {0}")]
    Encode(#[from] DrawError),

    #[error("Failed to save pattern: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("Export rejected: {0}")]
    Rejected(String),
}
