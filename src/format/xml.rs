use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
enum XmlError {
    #[error("parse error: {0}")]
    Parse(#[from] quick_xml::Error),
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
    #[error("output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("{0} element(s) left open")]
    Unclosed(usize),
    #[error("expected one root element, found {0}")]
    RootCount(usize),
    #[error("content outside the root element")]
    StrayContent,
    #[error("bad character data: {0}")]
    Escape(String),
}

/// Declaration written ahead of every formatted fragment
const DECLARATION: &str = r#"xml version="1.0" "#;

/// Whether a string value should be treated as an XML fragment
pub fn looks_like_xml(value: &str) -> bool {
    value.starts_with('<') && value.ends_with('>')
}

/// Re-indents an XML fragment with four spaces
///
/// The output starts with an XML declaration and ends with a newline.
/// Fragments that are not well-formed, including ones that reference
/// undefined entities, are returned unchanged.
///
/// # Examples
///
/// ```
/// use reqcopy::pretty_xml;
///
/// let pretty = pretty_xml("<a><b>1</b></a>");
/// assert_eq!(pretty, "<?xml version=\"1.0\" ?>\n<a>\n    <b>1</b>\n</a>\n");
///
/// assert_eq!(pretty_xml("<a><b></a>"), "<a><b></a>");
/// ```
pub fn pretty_xml(fragment: &str) -> String {
    match reindent(fragment) {
        Ok(pretty) => pretty,
        Err(e) => {
            debug!(error = %e, len = fragment.len(), "Leaving malformed XML fragment as is");
            fragment.to_string()
        }
    }
}

fn reindent(fragment: &str) -> Result<String, XmlError> {
    let mut reader = Reader::from_str(fragment);
    reader.config_mut().trim_text(true);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer.write_event(Event::Decl(BytesDecl::from_start(BytesStart::from_content(
        DECLARATION,
        3,
    ))))?;

    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Eof => break,
            // Replaced by our own declaration
            Event::Decl(_) => continue,
            Event::Start(start) => {
                check_attributes(start)?;
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.checked_sub(1).ok_or(XmlError::StrayContent)?;
            }
            Event::Empty(start) => {
                check_attributes(start)?;
                if depth == 0 {
                    roots += 1;
                }
            }
            Event::Text(_) | Event::CData(_) if depth == 0 => {
                return Err(XmlError::StrayContent);
            }
            Event::Text(text) => {
                text.unescape().map_err(|e| XmlError::Escape(e.to_string()))?;
            }
            _ => {}
        }
        writer.write_event(event)?;
    }

    if depth != 0 {
        return Err(XmlError::Unclosed(depth));
    }
    if roots != 1 {
        return Err(XmlError::RootCount(roots));
    }

    let mut pretty = String::from_utf8(writer.into_inner())?;
    pretty.push('\n');
    Ok(pretty)
}

/// Rejects attribute values with unknown entity references
fn check_attributes(start: &BytesStart<'_>) -> Result<(), XmlError> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| XmlError::Escape(e.to_string()))?;
        attr.unescape_value().map_err(|e| XmlError::Escape(e.to_string()))?;
    }
    Ok(())
}
