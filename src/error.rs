/// Error types for the application
///
/// Every fallible operation outside form validation reports a `SiteError`.
/// Errors that travel inside a `Message` are wrapped in `Arc` so messages
/// stay `Clone`.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Filesystem failure
    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON (config file, stored inquiry)
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Outbox database failure
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Image download failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Downloaded bytes were not a decodable image
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// A background task panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(String),

    /// No usable directory for config, data or cache
    #[error("no {0} directory available on this system")]
    NoDirectory(&'static str),
}

impl SiteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<tokio::task::JoinError> for SiteError {
    fn from(err: tokio::task::JoinError) -> Self {
        SiteError::Task(err.to_string())
    }
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
