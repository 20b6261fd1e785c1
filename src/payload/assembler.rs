use super::config::FormatConfig;
use super::mode::FormatMode;
use crate::format::format_body;
use crate::message::{HttpMessage, RequestResponse, SelectionBounds, strip_trailing_newlines};
use crate::{CopyError, Result};
use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

/// Literal separator byte between sections
pub const CR: u8 = b'\r';

pub const REQUEST_LABEL: &[u8] = b"HTTP Request:";
pub const RESPONSE_LABEL: &[u8] = b"HTTP Response:";

/// The bytes destined for the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    bytes: Bytes,
}

impl ClipboardPayload {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self { bytes: bytes.into() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decodes the payload and normalizes every line ending to `\n`
    ///
    /// CRLF pairs collapse to one newline and the remaining lone carriage
    /// returns (the section separators) become newlines too. Invalid UTF-8
    /// is replaced rather than rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqcopy::ClipboardPayload;
    ///
    /// let payload = ClipboardPayload::new(&b"A: b\r\nC: d\r\rbody"[..]);
    /// assert_eq!(payload.normalized_text(), "A: b\nC: d\n\nbody");
    /// ```
    pub fn normalized_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes)
            .replace("\r\n", "\n")
            .replace('\r', "\n")
    }
}

impl AsRef<[u8]> for ClipboardPayload {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Builds the clipboard payload for `mode`
///
/// Every mode needs a response. `FullSelected` also needs `selection`,
/// validated against the response length before anything is built.
pub fn assemble(
    mode: FormatMode,
    exchange: &RequestResponse,
    selection: Option<SelectionBounds>,
    config: &FormatConfig,
) -> Result<ClipboardPayload> {
    let request = &exchange.request;
    let response = exchange.require_response()?;

    let bytes = match mode {
        FormatMode::PrettyJson => labeled(request, response, true, config.pretty_response),
        FormatMode::Raw => labeled(request, response, false, false),
        FormatMode::FullFull => full(request, response),
        FormatMode::FullHeader => full_header(request, response, config),
        FormatMode::FullSelected => {
            let selection = selection.ok_or(CopyError::MissingSelection)?;
            full_selected(request, response, selection, config)?
        }
    };

    debug!(%mode, bytes = bytes.len(), "Assembled clipboard payload");
    Ok(ClipboardPayload::new(bytes.freeze()))
}

fn labeled(
    request: &HttpMessage,
    response: &HttpMessage,
    pretty_request: bool,
    pretty_response: bool,
) -> BytesMut {
    let (request_headers, request_body) = request.split();
    let (response_headers, response_body) = response.split();

    let mut data = BytesMut::with_capacity(request.len() + response.len() + 64);

    data.put_slice(REQUEST_LABEL);
    data.put_u8(CR);
    data.put_slice(request_headers);
    data.put_u8(CR);
    data.put_u8(CR);
    put_body(&mut data, request_body, pretty_request);
    data.put_u8(CR);
    data.put_u8(CR);

    data.put_slice(RESPONSE_LABEL);
    data.put_u8(CR);
    data.put_slice(response_headers);
    data.put_u8(CR);
    data.put_u8(CR);
    put_body(&mut data, response_body, pretty_response);

    data
}

fn put_body(data: &mut BytesMut, body: &[u8], pretty: bool) {
    if pretty {
        data.put_slice(&format_body(body));
    } else {
        data.put_slice(body);
    }
}

/// Request with trailing newlines removed followed by two separators
fn request_prefix(request: &HttpMessage, extra: usize) -> BytesMut {
    let request = strip_trailing_newlines(request.as_bytes());
    let mut data = BytesMut::with_capacity(request.len() + 2 + extra);
    data.put_slice(request);
    data.put_u8(CR);
    data.put_u8(CR);
    data
}

fn full(request: &HttpMessage, response: &HttpMessage) -> BytesMut {
    let response = strip_trailing_newlines(response.as_bytes());
    let mut data = request_prefix(request, response.len());
    data.put_slice(response);
    data
}

fn full_header(request: &HttpMessage, response: &HttpMessage, config: &FormatConfig) -> BytesMut {
    let headers = response.header_block();
    let mut data = request_prefix(request, headers.len() + config.cut_marker.len());
    data.put_slice(headers);
    data.put_slice(config.cut_marker.as_bytes());
    data
}

fn full_selected(
    request: &HttpMessage,
    response: &HttpMessage,
    selection: SelectionBounds,
    config: &FormatConfig,
) -> Result<BytesMut> {
    let selected = selection.slice(response.as_bytes())?;
    let headers = response.header_block();
    let marker = config.cut_marker.as_bytes();

    let mut data = request_prefix(request, headers.len() + selected.len() + 2 * marker.len() + 2);
    data.put_slice(headers);
    data.put_slice(marker);
    data.put_u8(CR);
    data.put_slice(selected);
    data.put_u8(CR);
    data.put_slice(marker);
    Ok(data)
}
