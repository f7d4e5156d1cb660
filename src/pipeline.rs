//! The render-and-capture pipeline

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::async_api::Browser;
use crate::document::{self, RenderedDocument};
use crate::{clipboard, CaptureConfig, Result, Snippet};

/// Summary of one successful render-and-capture invocation.
#[derive(Debug, Clone, Serialize)]
pub struct CaptureOutcome {
    /// Resolved language label (explicit or auto-detected)
    pub language: String,
    /// Where the image artifact was written
    pub image_path: PathBuf,
    /// Size of the PNG artifact in bytes
    pub image_bytes: usize,
    /// Whether the markup was placed on the clipboard
    pub copied_to_clipboard: bool,
    /// The exact markup that was rendered (and copied); omitted from the
    /// serialized summary
    #[serde(skip)]
    pub markup: String,
}

/// Render a snippet to a styled image at `output` and copy the generated
/// markup to the system clipboard.
///
/// The browser is released on every exit path: the capture result is held
/// while the browser shuts down, and the worker drops the engine if the
/// command channel closes early.
pub async fn create_code_image(
    snippet: &Snippet,
    output: &Path,
    config: &CaptureConfig,
) -> Result<CaptureOutcome> {
    let RenderedDocument { language, html } = document::render_markup(snippet)?;

    // The capture step needs a loadable document source on disk. The guard
    // deletes the file on drop, so failures below leave nothing behind.
    let temp = tempfile::Builder::new()
        .prefix("snipshot-")
        .suffix(".html")
        .tempfile()?;
    fs::write(temp.path(), &html)?;

    let browser = Browser::new(Some(config.clone())).await?;
    let captured = capture_to(&browser, temp.path(), output).await;
    let closed = browser.close().await;
    let image_bytes = captured?;
    closed?;

    temp.close()?;

    let copied_to_clipboard = config.copy_to_clipboard;
    if copied_to_clipboard {
        clipboard::copy_text(&html)?;
    }

    debug!("rendered {} snippet to {}", language, output.display());

    Ok(CaptureOutcome {
        language,
        image_path: output.to_path_buf(),
        image_bytes,
        copied_to_clipboard,
        markup: html,
    })
}

async fn capture_to(browser: &Browser, page: &Path, output: &Path) -> Result<usize> {
    browser.goto_file(page).await?;
    let png = browser.screenshot().await?;
    fs::write(output, &png)?;
    Ok(png.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_summary_omits_markup() {
        let outcome = CaptureOutcome {
            language: "rust".to_string(),
            image_path: PathBuf::from("out.png"),
            image_bytes: 1024,
            copied_to_clipboard: true,
            markup: "<!DOCTYPE html>".to_string(),
        };

        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"language\":\"rust\""));
        assert!(json.contains("\"image_bytes\":1024"));
        assert!(!json.contains("DOCTYPE"));
    }
}
