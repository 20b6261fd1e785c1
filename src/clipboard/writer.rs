use super::config::ClipboardConfig;
use super::sink::ClipboardSink;
use crate::payload::ClipboardPayload;
use crate::{CopyError, Result};
use std::sync::Mutex;
use tracing::info;

/// Serializes clipboard writes through one injected sink
pub struct ClipboardWriter<S> {
    sink: Mutex<S>,
    config: ClipboardConfig,
}

impl<S: ClipboardSink> ClipboardWriter<S> {
    pub fn new(sink: S, config: ClipboardConfig) -> Self {
        Self {
            sink: Mutex::new(sink),
            config,
        }
    }

    pub fn config(&self) -> &ClipboardConfig {
        &self.config
    }

    /// Writes the payload to the clipboard and the primary selection
    ///
    /// Line endings are normalized before the lock is taken. Both buffers are
    /// written under the same lock so no other write lands in between.
    pub fn write(&self, payload: &ClipboardPayload) -> Result<()> {
        let text = payload.normalized_text();

        let mut sink = self.sink.lock().map_err(|_| CopyError::LockPoisoned)?;
        sink.set_clipboard(&text)?;
        if self.config.primary_selection {
            sink.set_primary(&text)?;
        }
        drop(sink);

        info!(bytes = text.len(), "Copied to clipboard");
        Ok(())
    }

    /// Consumes the writer and returns the sink
    pub fn into_inner(self) -> Result<S> {
        self.sink.into_inner().map_err(|_| CopyError::LockPoisoned)
    }
}
