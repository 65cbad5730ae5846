//! Error types for wp2jekyll

use thiserror::Error;

/// Main error type for wp2jekyll operations
#[derive(Error, Debug)]
pub enum Wp2JekyllError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Begin/end code delimiters are unbalanced or mis-ordered
    #[error("Malformed code delimiters: {0}")]
    MalformedDelimiters(String),

    /// Error while extracting posts from a WXR feed
    #[error("Feed error: {0}")]
    Feed(String),

    /// Error while rendering site output files
    #[error("Site error: {0}")]
    Site(String),

    /// Error while reading or writing an archive
    #[error("Archive error: {0}")]
    Archive(String),
}

/// Result type alias for wp2jekyll operations
pub type Result<T> = std::result::Result<T, Wp2JekyllError>;
