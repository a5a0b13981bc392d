//! Request document error types.

use crate::catalogue::CatalogueError;
use crate::router::ConfigError;

/// Errors that stop a request document from being processed.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The document could not be read
    #[error("failed to read request document: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or has the wrong shape
    #[error("malformed request document: {0}")]
    Json(#[from] serde_json::Error),

    /// The base requests describe an inconsistent network
    #[error("invalid base request: {0}")]
    Catalogue(#[from] CatalogueError),

    /// The routing settings are unusable
    #[error("invalid routing settings: {0}")]
    Config(#[from] ConfigError),
}
