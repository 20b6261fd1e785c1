use super::splitter::HttpMessage;
use crate::{CopyError, Result};
use std::path::Path;
use tracing::debug;

/// One request/response pair selected in the proxy
///
/// The proxy may not have received a response yet, so it is optional.
#[derive(Debug, Clone)]
pub struct RequestResponse {
    pub request: HttpMessage,
    pub response: Option<HttpMessage>,
}

impl RequestResponse {
    pub fn new(request: impl Into<HttpMessage>, response: Option<HttpMessage>) -> Self {
        Self {
            request: request.into(),
            response,
        }
    }

    /// Loads raw messages saved from the proxy
    pub fn from_files(request: &Path, response: Option<&Path>) -> Result<Self> {
        let request = std::fs::read(request)?;
        let response = response.map(std::fs::read).transpose()?;
        debug!(
            request_bytes = request.len(),
            response_bytes = response.as_ref().map(Vec::len),
            "Loaded captured messages"
        );
        Ok(Self {
            request: HttpMessage::new(request),
            response: response.map(HttpMessage::new),
        })
    }

    /// Returns the response or `CopyError::MissingResponse`
    pub fn require_response(&self) -> Result<&HttpMessage> {
        self.response.as_ref().ok_or(CopyError::MissingResponse)
    }
}

/// Half-open byte range `[start, end)` selected in the response editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionBounds {
    pub start: usize,
    pub end: usize,
}

impl SelectionBounds {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Checks the range against a message of `len` bytes
    ///
    /// Empty, inverted and out-of-bounds ranges are rejected so a bad
    /// selection never reaches the clipboard.
    pub fn validate(&self, len: usize) -> Result<()> {
        if self.start > self.end || self.end > len {
            return Err(CopyError::InvalidSelection {
                start: self.start,
                end: self.end,
                len,
            });
        }
        if self.start == self.end {
            return Err(CopyError::EmptySelection { start: self.start });
        }
        Ok(())
    }

    /// Slices `data`, validating first
    pub fn slice<'a>(&self, data: &'a [u8]) -> Result<&'a [u8]> {
        self.validate(data.len())?;
        Ok(&data[self.start..self.end])
    }
}

impl std::str::FromStr for SelectionBounds {
    type Err = String;

    /// Parses `START:END`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| format!("expected START:END, got {s:?}"))?;
        let start = start
            .trim()
            .parse()
            .map_err(|e| format!("invalid selection start {start:?}: {e}"))?;
        let end = end
            .trim()
            .parse()
            .map_err(|e| format!("invalid selection end {end:?}: {e}"))?;
        Ok(Self { start, end })
    }
}
