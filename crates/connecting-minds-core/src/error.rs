//! Error types for Connecting Minds content loading

use thiserror::Error;

/// Errors raised while loading or validating site content.
///
/// The widgets themselves never fail; only reading a content file can.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Content file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file is not valid JSON or has the wrong shape
    #[error("Content parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record is missing a required field
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Two cards share a title, so their transition keys would collide
    #[error("Duplicate card title: {0}")]
    DuplicateCardTitle(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
