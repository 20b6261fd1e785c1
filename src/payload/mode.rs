use crate::CopyError;
use std::fmt;
use std::str::FromStr;

/// How a selected exchange is rendered for the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatMode {
    /// Labeled sections with the request body pretty-printed as JSON
    PrettyJson,
    /// Labeled sections with both bodies copied as is
    Raw,
    /// Full request followed by the full response
    FullFull,
    /// Full request followed by the response headers and a cut marker
    FullHeader,
    /// Full request, response headers and the selected part of the response
    FullSelected,
}

impl FormatMode {
    pub const ALL: [FormatMode; 5] = [
        FormatMode::PrettyJson,
        FormatMode::Raw,
        FormatMode::FullFull,
        FormatMode::FullHeader,
        FormatMode::FullSelected,
    ];

    /// Short name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            FormatMode::PrettyJson => "json",
            FormatMode::Raw => "raw",
            FormatMode::FullFull => "full",
            FormatMode::FullHeader => "header",
            FormatMode::FullSelected => "selected",
        }
    }

    /// Whether the mode needs the host's response selection
    pub fn requires_selection(self) -> bool {
        matches!(self, FormatMode::FullSelected)
    }

    /// Number of cut markers the mode writes
    pub fn cut_points(self) -> usize {
        match self {
            FormatMode::FullHeader => 1,
            FormatMode::FullSelected => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatMode {
    type Err = CopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        FormatMode::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| CopyError::UnknownMode(s.to_string()))
    }
}
