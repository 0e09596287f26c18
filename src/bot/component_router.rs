use crate::model::{ComponentHandler, DeferrableInteraction};
use anyhow::Result;
use std::sync::Arc;

/// Routes component interactions to the first registered handler that accepts them
pub struct ComponentRouter<I: DeferrableInteraction + ?Sized> {
    handlers: Vec<Arc<dyn ComponentHandler<I>>>,
}

impl<I: DeferrableInteraction + ?Sized> ComponentRouter<I> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Add a handler; earlier registrations win when prefixes overlap
    pub fn register(mut self, handler: Arc<dyn ComponentHandler<I>>) -> Self {
        if let Some(existing) = self
            .handlers
            .iter()
            .find(|h| {
                h.model().variant() == handler.model().variant()
                    && handler.model().id().starts_with(h.model().id())
            })
        {
            tracing::warn!(
                "[ROUTER] Handler '{}' is shadowed by earlier prefix '{}'",
                handler.model().id(),
                existing.model().id()
            );
        }

        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Dispatch `interaction`; `Ok(false)` means no handler matched
    pub async fn route(&self, interaction: Arc<I>) -> Result<bool> {
        let custom_id = interaction.custom_id();

        let Some(handler) = self
            .handlers
            .iter()
            .find(|h| h.can_handle(custom_id, &*interaction))
        else {
            tracing::debug!("[ROUTER] Unhandled component interaction: {}", custom_id);
            return Ok(false);
        };

        tracing::debug!(
            "[ROUTER] '{}' handled by '{}'",
            custom_id,
            handler.model().id()
        );

        handler.process(Arc::clone(&interaction)).await?;
        Ok(true)
    }
}

impl<I: DeferrableInteraction + ?Sized> Default for ComponentRouter<I> {
    fn default() -> Self {
        Self::new()
    }
}
