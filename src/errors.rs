//! Shared error types used across submodules.

use thiserror::Error;

use crate::control::ControlError;
use crate::fields::FieldError;
use crate::grid::GridError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum PotentialError {
    /// Degenerate potential evaluation.
    #[error(transparent)]
    Field(#[from] FieldError),
    /// Invalid grid or mismatched field.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Input outside the slider domain.
    #[error(transparent)]
    Control(#[from] ControlError),
    /// Figure serialization failed.
    #[error("figure serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing an export failed.
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}
