use crate::clipboard::ClipboardConfig;
use crate::payload::FormatConfig;

/// Configuration for a `Copier`
///
/// Combines payload formatting with clipboard behavior.
///
/// # Examples
///
/// ```
/// use reqcopy::{ClipboardConfig, CopierConfig, FormatConfig};
/// use std::time::Duration;
///
/// let config = CopierConfig {
///     format: FormatConfig::default(),
///     clipboard: ClipboardConfig {
///         primary_selection: true,
///         selection_delay: Duration::ZERO,
///     },
/// };
/// assert_eq!(config.format.cut_marker, "[...]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopierConfig {
    pub format: FormatConfig,
    pub clipboard: ClipboardConfig,
}
