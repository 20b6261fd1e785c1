//! Captured HTTP messages as the host hands them over
//!
//! Messages are opaque byte sequences. The only structure this crate cares
//! about is where the header block ends and the body begins.

pub mod exchange;
pub mod splitter;


pub use exchange::{RequestResponse, SelectionBounds};
pub use splitter::{HEADER_SEPARATOR, HttpMessage, strip_trailing_newlines};
