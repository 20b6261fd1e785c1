use bytes::Bytes;
use tracing::debug;

/// Blank line that ends the header block
pub const HEADER_SEPARATOR: &[u8] = b"\r\n\r\n";

/// Upper bound on headers handed to `httparse` when locating the body
const MAX_HEADERS: usize = 128;

/// An HTTP request or response as raw bytes
///
/// No semantic validation is performed: the message is only split into a
/// header block and a body block.
///
/// # Examples
///
/// ```
/// use reqcopy::HttpMessage;
///
/// let message = HttpMessage::from_static(b"GET / HTTP/1.1\r\nHost: a\r\n\r\nbody");
/// let (headers, body) = message.split();
/// assert_eq!(headers, b"GET / HTTP/1.1\r\nHost: a");
/// assert_eq!(body, b"body");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMessage {
    bytes: Bytes,
}

impl HttpMessage {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self { bytes: bytes.into() }
    }

    pub fn from_static(bytes: &'static [u8]) -> Self {
        Self {
            bytes: Bytes::from_static(bytes),
        }
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

    /// Splits at the first blank line into `(headers, body)`
    ///
    /// The separator belongs to neither half. Without a separator the whole
    /// message is treated as headers and the body is empty.
    pub fn split(&self) -> (&[u8], &[u8]) {
        match find_separator(&self.bytes) {
            Some(pos) => (
                &self.bytes[..pos],
                &self.bytes[pos + HEADER_SEPARATOR.len()..],
            ),
            None => {
                debug!(len = self.bytes.len(), "No header separator, treating message as headers only");
                (&self.bytes[..], &[])
            }
        }
    }

    /// Offset of the first body byte
    ///
    /// The header block is located with `httparse` so bare `\n` line endings
    /// are accepted too. Messages `httparse` rejects fall back to a plain
    /// CRLFCRLF search, and a message without any blank line has no body.
    pub fn body_offset(&self) -> usize {
        if let Some(offset) = parsed_header_len(&self.bytes) {
            return offset;
        }
        find_separator(&self.bytes)
            .map(|pos| pos + HEADER_SEPARATOR.len())
            .unwrap_or(self.bytes.len())
    }

    /// Header block including the blank line that terminates it
    pub fn header_block(&self) -> &[u8] {
        &self.bytes[..self.body_offset()]
    }
}

impl From<Vec<u8>> for HttpMessage {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for HttpMessage {
    fn from(text: &str) -> Self {
        Self::new(Bytes::copy_from_slice(text.as_bytes()))
    }
}

impl AsRef<[u8]> for HttpMessage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Drops trailing `\r` and `\n` bytes
pub fn strip_trailing_newlines(data: &[u8]) -> &[u8] {
    let end = data
        .iter()
        .rposition(|b| !matches!(b, b'\r' | b'\n'))
        .map(|pos| pos + 1)
        .unwrap_or(0);
    &data[..end]
}

fn find_separator(data: &[u8]) -> Option<usize> {
    data.windows(HEADER_SEPARATOR.len())
        .position(|window| window == HEADER_SEPARATOR)
}

fn parsed_header_len(data: &[u8]) -> Option<usize> {
    let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];
    let status = if data.starts_with(b"HTTP/") {
        httparse::Response::new(&mut headers).parse(data)
    } else {
        httparse::Request::new(&mut headers).parse(data)
    };

    match status {
        Ok(httparse::Status::Complete(len)) => Some(len),
        Ok(httparse::Status::Partial) => None,
        Err(e) => {
            debug!(error = %e, "httparse rejected header block, falling back to separator search");
            None
        }
    }
}
