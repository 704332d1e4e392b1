//! Clipboard sink
//!
//! On quit the calculator hands the bottom-most stack value to a
//! [`ClipboardSink`]. The system implementation wraps `arboard`; sessions
//! without clipboard access use [`NoClipboard`].

use crate::config::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Backend(#[from] arboard::Error),
}

/// Destination for text copied on quit
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(SystemClipboard {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text)?;
        Ok(())
    }
}

/// A sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardSink for NoClipboard {
    fn copy_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

/// Pick the sink for this session.
///
/// Falls back to [`NoClipboard`] when copying is disabled or no clipboard can
/// be opened (e.g. a headless session).
pub fn from_config(config: &Config) -> Box<dyn ClipboardSink> {
    if !config.clipboard {
        log::info!("clipboard disabled by configuration");
        return Box::new(NoClipboard);
    }
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            log::warn!("{}", e);
            Box::new(NoClipboard)
        }
    }
}
