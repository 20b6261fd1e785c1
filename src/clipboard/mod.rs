//! Clipboard output
//!
//! All writes go through one `ClipboardWriter`, which owns the injected
//! `ClipboardSink` behind a mutex so concurrent copies serialize. Delayed
//! copies are jobs on a `CopyQueue` worker rather than ad hoc threads.
//!
//! # Examples
//!
//! ```
//! use reqcopy::{ClipboardConfig, ClipboardPayload, ClipboardWriter, MemoryClipboard};
//!
//! let sink = MemoryClipboard::default();
//! let writer = ClipboardWriter::new(sink.clone(), ClipboardConfig::default());
//!
//! writer.write(&ClipboardPayload::new(&b"GET / HTTP/1.1\r\nHost: a"[..])).unwrap();
//! assert_eq!(sink.clipboard_text().as_deref(), Some("GET / HTTP/1.1\nHost: a"));
//! assert_eq!(sink.primary_text().as_deref(), Some("GET / HTTP/1.1\nHost: a"));
//! ```

pub mod config;
pub mod error;
pub mod queue;
pub mod sink;
pub mod writer;


pub use config::ClipboardConfig;
pub use error::ClipboardError;
pub use queue::{CopyQueue, CopyTicket};
pub use sink::{ClipboardSink, ClipboardTarget, ClipboardWrite, MemoryClipboard, SystemClipboard};
pub use writer::ClipboardWriter;
