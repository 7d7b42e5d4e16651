//! Unified error types for the lead enrichment handler
//!
//! This module defines error types for each layer:
//! - `EnrichmentError`: Apollo enrichment API client errors
//! - `StoreError`: Lead record store errors
//! - `NotifyError`: Notification channel errors
//! - `AppError`: Application layer errors (what the handler boundary logs)

use thiserror::Error;

/// Apollo enrichment API client errors
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid API key")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unexpected response shape: {0}")]
    Schema(String),
}

/// Lead record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Write rejected: {0}")]
    Rejected(String),
}

/// Notification channel errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Publish rejected: {0}")]
    Rejected(String),
}

/// Application layer errors - everything the pipeline can fail with
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Notify error: {0}")]
    Notify(#[from] NotifyError),
}

impl AppError {
    /// Short label for the error class, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Enrichment(_) => "enrichment",
            AppError::Store(_) => "store",
            AppError::Notify(_) => "notify",
        }
    }

    /// Whether the failure came from a downstream system rather than the event itself
    pub fn is_downstream(&self) -> bool {
        !matches!(self, AppError::InvalidInput(_))
    }
}
