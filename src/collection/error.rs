use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a byte source into a collection document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Collection source unreadable ({}): {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed collection JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// Failures of the full read -> extract -> render pipeline
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to render summary: {0}")]
    Render(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ParseError>;
