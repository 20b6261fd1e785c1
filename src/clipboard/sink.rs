use super::error::ClipboardError;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Destination for clipboard text
///
/// Implementations are only ever called with the writer's lock held.
pub trait ClipboardSink: Send {
    /// Replaces the system clipboard contents
    fn set_clipboard(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Replaces the primary selection; platforms without one ignore it
    fn set_primary(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

/// `arboard`-backed system clipboard
///
/// The backend handle is opened on first use and kept so the contents stay
/// served while the process runs. A failed write drops the handle and the
/// next write reconnects.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => {
                debug!("Opening system clipboard");
                arboard::Clipboard::new()?
            }
        };
        Ok(self.inner.insert(clipboard))
    }

    fn reset_on_error<T>(&mut self, result: Result<T, arboard::Error>) -> Result<T, ClipboardError> {
        result.map_err(|e| {
            self.inner = None;
            ClipboardError::Backend(e)
        })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self.handle()?.set_text(text);
        self.reset_on_error(result)
    }

    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    fn set_primary(&mut self, text: &str) -> Result<(), ClipboardError> {
        use arboard::{LinuxClipboardKind, SetExtLinux};

        let result = self
            .handle()?
            .set()
            .clipboard(LinuxClipboardKind::Primary)
            .text(text);
        self.reset_on_error(result)
    }
}

/// Which buffer a recorded write went to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardTarget {
    Clipboard,
    Primary,
}

/// One write seen by `MemoryClipboard`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardWrite {
    pub target: ClipboardTarget,
    pub text: String,
}

/// In-memory sink that records every write
///
/// Clones share the same log, so a clone kept by the caller observes what
/// the writer did with the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    log: Arc<Mutex<Vec<ClipboardWrite>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes in order
    pub fn writes(&self) -> Vec<ClipboardWrite> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Current clipboard contents
    pub fn clipboard_text(&self) -> Option<String> {
        self.last(ClipboardTarget::Clipboard)
    }

    /// Current primary selection contents
    pub fn primary_text(&self) -> Option<String> {
        self.last(ClipboardTarget::Primary)
    }

    fn last(&self, target: ClipboardTarget) -> Option<String> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .find(|write| write.target == target)
            .map(|write| write.text.clone())
    }

    fn record(&self, target: ClipboardTarget, text: &str) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ClipboardWrite {
                target,
                text: text.to_string(),
            });
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.record(ClipboardTarget::Clipboard, text);
        Ok(())
    }

    fn set_primary(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.record(ClipboardTarget::Primary, text);
        Ok(())
    }
}
