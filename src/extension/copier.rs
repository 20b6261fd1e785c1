use super::config::CopierConfig;
use super::context::MessageContext;
use super::menu::{MenuItem, MenuSet};
use crate::clipboard::{ClipboardSink, ClipboardWriter, CopyQueue, CopyTicket};
use crate::payload::{ClipboardPayload, FormatMode, assemble};
use crate::{CopyError, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Menu action handler shared by both plugin flavors
///
/// Builds the payload synchronously, so selection errors surface to the
/// caller before anything is queued, then hands the write to the queue.
pub struct Copier {
    config: CopierConfig,
    queue: CopyQueue,
}

impl Copier {
    /// Starts the copy queue on the current tokio runtime
    pub fn start<S>(sink: S, config: CopierConfig) -> Self
    where
        S: ClipboardSink + 'static,
    {
        let writer = Arc::new(ClipboardWriter::new(sink, config.clipboard.clone()));
        let queue = CopyQueue::start(writer);
        Self { config, queue }
    }

    pub fn config(&self) -> &CopierConfig {
        &self.config
    }

    /// Menu entries for one plugin flavor
    pub fn menu_items(&self, set: MenuSet) -> &'static [MenuItem] {
        set.items()
    }

    /// Handles one menu action
    ///
    /// Selection-based copies wait for the configured delay before writing.
    pub fn invoke(&self, mode: FormatMode, context: &impl MessageContext) -> Result<CopyTicket> {
        let (payload, delay) = match self.prepare(mode, context) {
            Ok(prepared) => prepared,
            Err(e) => {
                warn!(%mode, error = %e, "Copy rejected");
                return Err(e);
            }
        };

        info!(
            %mode,
            bytes = payload.len(),
            delay_ms = delay.as_millis() as u64,
            "Copying request and response"
        );
        self.queue.submit(payload, delay)
    }

    /// Handles the menu item with `label`
    pub fn invoke_label(
        &self,
        set: MenuSet,
        label: &str,
        context: &impl MessageContext,
    ) -> Result<CopyTicket> {
        let item = set
            .find(label)
            .ok_or_else(|| CopyError::UnknownMode(label.to_string()))?;
        self.invoke(item.mode, context)
    }

    /// Stops the queue, cancelling copies that have not run yet
    pub async fn shutdown(self) {
        self.queue.shutdown().await;
    }

    fn prepare(
        &self,
        mode: FormatMode,
        context: &impl MessageContext,
    ) -> Result<(ClipboardPayload, Duration)> {
        let exchange = context
            .selected_messages()
            .first()
            .ok_or(CopyError::NoMessageSelected)?;

        let (selection, delay) = if mode.requires_selection() {
            (context.selection_bounds(), self.config.clipboard.selection_delay)
        } else {
            (None, Duration::ZERO)
        };

        let payload = assemble(mode, exchange, selection, &self.config.format)?;
        Ok((payload, delay))
    }
}
