use crate::clipboard::ClipboardError;
use thiserror::Error;

/// Error types for the reqcopy library
#[derive(Error, Debug)]
pub enum CopyError {
    /// The host reported no selected request/response pair
    #[error("No message selected")]
    NoMessageSelected,

    /// The selected exchange has no response yet
    #[error("Selected message has no response")]
    MissingResponse,

    /// A selection-based mode was invoked without selection bounds
    #[error("No response selection available")]
    MissingSelection,

    /// The selection covers zero bytes
    #[error("Selection at offset {start} is empty")]
    EmptySelection { start: usize },

    /// The selection is inverted or runs past the end of the response
    #[error("Selection {start}..{end} is outside the response ({len} bytes)")]
    InvalidSelection { start: usize, end: usize, len: usize },

    /// Clipboard backend errors (initialization, write)
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Another writer panicked while holding the clipboard lock
    #[error("Clipboard lock poisoned")]
    LockPoisoned,

    /// The copy queue worker is no longer running
    #[error("Copy queue closed")]
    QueueClosed,

    /// The job was dropped because the queue shut down before it ran
    #[error("Copy cancelled")]
    Cancelled,

    /// The blocking clipboard write panicked or was aborted
    #[error("Copy worker failed: {0}")]
    Worker(String),

    /// Unknown format mode name
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// IO errors while loading captured messages
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the reqcopy library
pub type Result<T> = std::result::Result<T, CopyError>;

pub mod clipboard;
pub mod extension;
pub mod format;
pub mod message;
pub mod payload;

// Re-export main types for convenience
pub use clipboard::{
    ClipboardConfig, ClipboardSink, ClipboardTarget, ClipboardWrite, ClipboardWriter, CopyQueue,
    CopyTicket, MemoryClipboard, SystemClipboard,
};
pub use extension::{Copier, CopierConfig, MenuItem, MenuSet, MessageContext, StaticContext};
pub use format::{format_body, pretty_xml};
pub use message::{HttpMessage, RequestResponse, SelectionBounds};
pub use payload::{ClipboardPayload, FormatConfig, FormatMode, assemble};
