//! # Hayat Core
//!
//! Editor session logic sitting between the history engine and the UI:
//! the in-memory document, the session facade the window talks to, and
//! the TOML configuration.

pub mod config;
pub mod document;
pub mod editor;

pub use config::Config;
pub use document::TextDocument;
pub use editor::{Editor, write_document};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("document has no file path; save-as required")]
    NoPath,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}
