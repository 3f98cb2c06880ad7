//! Error handling for flowdeck.
//!
//! [`FdError`] covers both data-contract failures (duplicate identifiers,
//! unknown stages) and infrastructure failures (config, IO). External
//! service unavailability is deliberately *not* represented here: the
//! matching and quote clients degrade to empty or synthetic results instead
//! of surfacing errors.

use std::io;

use thiserror::Error;

/// Main error type for flowdeck operations.
#[derive(Error, Debug)]
pub enum FdError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate entity id: {0}")]
    DuplicateEntity(String),

    #[error("Duplicate match score for entity: {0}")]
    DuplicateScore(String),

    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Deal not found: {0}")]
    DealNotFound(String),

    #[error("Unknown pipeline stage: {0}")]
    UnknownStage(String),

    #[error("Stage already exists: {0}")]
    DuplicateStage(String),

    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    #[error("Unknown sort field: {0} (expected name, type, location, or aum)")]
    UnknownSortField(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using FdError.
pub type Result<T> = std::result::Result<T, FdError>;
