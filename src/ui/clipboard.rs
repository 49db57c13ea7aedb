//! Clipboard access for the copy action.

use tracing::warn;

use crate::error::{Result, SnaplinkError};

use super::frontend::Frontend;
use super::notice::Notice;

/// Writes text to wherever "the clipboard" is, abstracted for testing.
pub trait Clipboard: Send + Sync {
    /// Place `text` on the clipboard.
    fn copy(&self, text: &str) -> Result<()>;
}

/// The system clipboard, backed by `arboard`.
///
/// A fresh handle is opened per copy; copies are rare and some platforms
/// tie the handle to the opening thread.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| SnaplinkError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| SnaplinkError::Clipboard(e.to_string()))
    }
}

/// Copy the current output field to the clipboard.
///
/// An empty output field short-circuits without touching the clipboard.
/// Failures are reported once through the frontend and never retried.
pub fn copy_short_url(clipboard: &dyn Clipboard, frontend: &dyn Frontend, short_url: &str) {
    if short_url.is_empty() {
        frontend.notice(Notice::NothingToCopy);
        return;
    }

    match clipboard.copy(short_url) {
        Ok(()) => frontend.notice(Notice::Copied),
        Err(error) => {
            warn!(error = %error, "Clipboard copy failed");
            frontend.notice(Notice::CopyFailed);
        }
    }
}
