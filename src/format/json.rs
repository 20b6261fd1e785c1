use super::xml::{looks_like_xml, pretty_xml};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::borrow::Cow;
use tracing::debug;

/// Indentation used for formatted JSON and XML
pub const INDENT: &[u8] = b"    ";

/// Pretty-prints a JSON body
///
/// Top-level string fields that look like XML (`<...>`) are replaced by
/// their indented form before the document is serialized with four-space
/// indentation. Key order is preserved. Bodies that are not UTF-8 or not
/// JSON are returned unchanged; nothing is partially rewritten.
///
/// # Examples
///
/// ```
/// use reqcopy::format_body;
///
/// let formatted = format_body(br#"{"id":7}"#);
/// assert_eq!(&formatted[..], b"{\n    \"id\": 7\n}");
///
/// let plain = format_body(b"name=value");
/// assert_eq!(&plain[..], b"name=value");
/// ```
pub fn format_body(body: &[u8]) -> Cow<'_, [u8]> {
    let Ok(text) = std::str::from_utf8(body) else {
        debug!(len = body.len(), "Body is not UTF-8, copying raw");
        return Cow::Borrowed(body);
    };

    match format_json(text) {
        Ok(pretty) => Cow::Owned(pretty),
        Err(e) => {
            debug!(error = %e, len = body.len(), "Body is not JSON, copying raw");
            Cow::Borrowed(body)
        }
    }
}

fn format_json(text: &str) -> serde_json::Result<Vec<u8>> {
    let mut document: Value = serde_json::from_str(text)?;

    if let Value::Object(fields) = &mut document {
        for (key, field) in fields.iter_mut() {
            if let Value::String(value) = field {
                if looks_like_xml(value) {
                    debug!(field = %key, "Expanding embedded XML");
                    *value = pretty_xml(value);
                }
            }
        }
    }

    let mut out = Vec::with_capacity(text.len() * 2);
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    Ok(out)
}
