//! Best-effort body formatting
//!
//! JSON bodies are re-indented with four spaces and XML fragments stored in
//! top-level string fields are expanded into indented XML. Anything that
//! fails to parse passes through untouched.

pub mod json;
pub mod xml;


pub use json::{INDENT, format_body};
pub use xml::{looks_like_xml, pretty_xml};
