/// Default marker inserted where content was cut
pub const DEFAULT_CUT_MARKER: &str = "[...]";

/// Configuration for payload assembly
///
/// # Examples
///
/// ```
/// use reqcopy::FormatConfig;
///
/// let config = FormatConfig {
///     cut_marker: "<snip>".to_string(),
///     pretty_response: true,
/// };
/// assert!(config.pretty_response);
/// ```
///
/// Using the default configuration:
///
/// ```
/// use reqcopy::FormatConfig;
///
/// let config = FormatConfig::default();
/// assert_eq!(config.cut_marker, "[...]");
/// assert!(!config.pretty_response);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Token written in place of omitted content
    pub cut_marker: String,
    /// Also pretty-print the response body in `PrettyJson` mode
    pub pretty_response: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            cut_marker: DEFAULT_CUT_MARKER.to_string(),
            pretty_response: false,
        }
    }
}
