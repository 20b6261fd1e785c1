use crate::message::{RequestResponse, SelectionBounds};

/// What the host knows about the current menu invocation
pub trait MessageContext {
    /// Exchanges selected when the menu opened; only the first is copied
    fn selected_messages(&self) -> &[RequestResponse];

    /// Selection inside the response editor, if any
    fn selection_bounds(&self) -> Option<SelectionBounds> {
        None
    }
}

/// Fixed context, for hosts that capture the selection up front
#[derive(Debug, Clone, Default)]
pub struct StaticContext {
    messages: Vec<RequestResponse>,
    selection: Option<SelectionBounds>,
}

impl StaticContext {
    pub fn new(messages: Vec<RequestResponse>) -> Self {
        Self {
            messages,
            selection: None,
        }
    }

    pub fn with_selection(mut self, selection: Option<SelectionBounds>) -> Self {
        self.selection = selection;
        self
    }
}

impl MessageContext for StaticContext {
    fn selected_messages(&self) -> &[RequestResponse] {
        &self.messages
    }

    fn selection_bounds(&self) -> Option<SelectionBounds> {
        self.selection
    }
}
