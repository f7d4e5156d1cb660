//! System clipboard integration

use arboard::Clipboard;
use log::debug;

use crate::{Error, Result};

/// Copy text to the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| Error::ClipboardError(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::ClipboardError(format!("Failed to copy: {}", e)))?;

    debug!("copied {} bytes to clipboard", text.len());
    Ok(())
}

/// Read the current clipboard text.
pub fn read_text() -> Result<String> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| Error::ClipboardError(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .get_text()
        .map_err(|e| Error::ClipboardError(format!("Failed to read clipboard: {}", e)))
}
