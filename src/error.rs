//! Error types for the snippet rendering pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering and capturing a snippet
#[derive(Error, Debug)]
pub enum Error {
    /// An explicit language label matched no known syntax
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Syntax highlighting failed
    #[error("Highlighting failed: {0}")]
    HighlightError(String),

    /// Template parsing or rendering failed
    #[error("Template rendering failed: {0}")]
    TemplateError(String),

    /// Failed to launch the browser or open a tab
    #[error("Browser initialization failed: {0}")]
    InitializationError(String),

    /// Failed to navigate to the rendered document
    #[error("Failed to load document: {0}")]
    LoadError(String),

    /// Screenshot capture failed
    #[error("Screenshot capture failed: {0}")]
    CaptureError(String),

    /// Clipboard access failed
    #[error("Clipboard access failed: {0}")]
    ClipboardError(String),

    /// Temp document or output artifact I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
