//! System clipboard access

use anyhow::{Context, Result};

/// Clipboard writer used for the copy-address effect
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// arboard-backed system clipboard. Opened lazily so a headless session
/// only fails when something is actually copied.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("clipboard not available")?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .context("failed to copy to clipboard"),
            None => anyhow::bail!("clipboard not available"),
        }
    }
}
