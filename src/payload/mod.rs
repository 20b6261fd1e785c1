//! Clipboard payload assembly
//!
//! Each `FormatMode` maps a selected exchange onto one byte buffer built
//! from labeled sections, literal carriage returns and cut markers.

pub mod assembler;
pub mod config;
pub mod mode;

#[cfg(test)]
mod tests;

pub use assembler::{CR, ClipboardPayload, REQUEST_LABEL, RESPONSE_LABEL, assemble};
pub use config::FormatConfig;
pub use mode::FormatMode;
