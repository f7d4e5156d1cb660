//! Snipshot
//!
//! Renders a syntax-highlighted code snippet into a styled, self-contained
//! HTML document, screenshots that document with headless Chrome, and copies
//! the generated markup to the system clipboard.
//!
//! # Features
//!
//! - **One-shot pipeline**: highlight, interpolate a presentational template,
//!   screenshot, copy to clipboard
//! - **Language auto-detection**: an explicit label is optional; detection
//!   falls back to plain text when nothing matches
//! - **Scoped browser lifetime**: the Chrome instance is released on every
//!   exit path, success or failure
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use snipshot::{create_code_image, CaptureConfig, Snippet};
//!
//! # async fn run() -> snipshot::Result<()> {
//! let snippet = Snippet::with_language("console.log('hi')", "javascript");
//! let outcome =
//!     create_code_image(&snippet, Path::new("out.png"), &CaptureConfig::default()).await?;
//! println!("rendered {} snippet", outcome.language);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod capture;
pub mod clipboard;
pub mod document;
pub mod highlight;

// Async-friendly browser API (worker-backed abstraction over the engine)
pub mod async_api;
pub use async_api::Browser;

pub mod pipeline;
pub use pipeline::{create_code_image, CaptureOutcome};

/// Configuration for the capture pipeline
///
/// The defaults are conservative: a desktop-sized viewport, a 30 second
/// navigation timeout, and a short settle delay after navigation so the
/// template's fade-in animation finishes before the screenshot is taken.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Viewport dimensions for the headless browser window
    pub viewport: Viewport,
    /// Timeout for page loads and CDP calls in milliseconds
    pub timeout_ms: u64,
    /// Delay between navigation and screenshot in milliseconds
    pub settle_ms: u64,
    /// Whether to copy the generated markup to the system clipboard
    pub copy_to_clipboard: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            timeout_ms: 30000,
            settle_ms: 500,
            copy_to_clipboard: true,
        }
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// A code snippet to render: the code text plus an optional language label.
///
/// Exists only for the duration of one invocation. When `language` is absent
/// (or textually empty) the pipeline auto-detects one.
#[derive(Debug, Clone)]
pub struct Snippet {
    pub code: String,
    pub language: Option<String>,
}

impl Snippet {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: None,
        }
    }

    pub fn with_language(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: Some(language.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CaptureConfig::default();
        assert_eq!(config.viewport.width, 1280);
        assert_eq!(config.viewport.height, 720);
        assert_eq!(config.timeout_ms, 30000);
        assert!(config.copy_to_clipboard);
    }

    #[test]
    fn test_viewport() {
        let viewport = Viewport {
            width: 1920,
            height: 1080,
        };
        assert_eq!(viewport.width, 1920);
        assert_eq!(viewport.height, 1080);
    }

    #[test]
    fn snippet_constructors() {
        let plain = Snippet::new("SELECT 1;");
        assert!(plain.language.is_none());

        let tagged = Snippet::with_language("SELECT 1;", "sql");
        assert_eq!(tagged.language.as_deref(), Some("sql"));
    }
}
