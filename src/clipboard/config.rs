use std::time::Duration;

/// Delay before a selection-based copy touches the clipboard
///
/// The proxy clears its editor selection right after the menu action fires,
/// which races with the copy.
pub const DEFAULT_SELECTION_DELAY: Duration = Duration::from_millis(1500);

/// Configuration for clipboard writes
///
/// # Examples
///
/// ```
/// use reqcopy::ClipboardConfig;
/// use std::time::Duration;
///
/// let config = ClipboardConfig {
///     primary_selection: false,
///     selection_delay: Duration::ZERO,
/// };
/// assert!(!config.primary_selection);
/// ```
///
/// Using the default configuration:
///
/// ```
/// use reqcopy::ClipboardConfig;
/// use std::time::Duration;
///
/// let config = ClipboardConfig::default();
/// assert!(config.primary_selection);
/// assert_eq!(config.selection_delay, Duration::from_millis(1500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardConfig {
    /// Also write the primary selection where the platform has one
    pub primary_selection: bool,
    /// Delay applied to copies that depend on the editor selection
    pub selection_delay: Duration,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            primary_selection: true,
            selection_delay: DEFAULT_SELECTION_DELAY,
        }
    }
}
