use thiserror::Error;

/// Failure reported by a document store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(#[from] sqlx::Error),

    #[error("store migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("store is not configured: {0}")]
    NotConfigured(String),
}
