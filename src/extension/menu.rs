use crate::payload::FormatMode;

/// Name the plugins register under
pub const EXTENSION_NAME: &str = "Copy HTTP Request & Response";

/// A context-menu entry and the mode it triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub mode: FormatMode,
}

/// The two plugin flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSet {
    /// Labeled copies, with or without JSON formatting
    Json,
    /// Full request with full, header-only or selected response
    Full,
}

const JSON_ITEMS: &[MenuItem] = &[
    MenuItem {
        label: "Copy Request json",
        mode: FormatMode::PrettyJson,
    },
    MenuItem {
        label: "Copy Request no json",
        mode: FormatMode::Raw,
    },
];

const FULL_ITEMS: &[MenuItem] = &[
    MenuItem {
        label: "Copy HTTP Request & Response (Full/Full)",
        mode: FormatMode::FullFull,
    },
    MenuItem {
        label: "Copy HTTP Request & Response (Full/Header)",
        mode: FormatMode::FullHeader,
    },
    MenuItem {
        label: "Copy HTTP Request & Response (Full/Selected)",
        mode: FormatMode::FullSelected,
    },
];

impl MenuSet {
    pub fn items(self) -> &'static [MenuItem] {
        match self {
            MenuSet::Json => JSON_ITEMS,
            MenuSet::Full => FULL_ITEMS,
        }
    }

    /// Looks up the item with `label`
    pub fn find(self, label: &str) -> Option<MenuItem> {
        self.items().iter().copied().find(|item| item.label == label)
    }
}
