use crate::model::deferral::DEFAULT_DEFER_DELAY;
use crate::model::{ComponentVariant, DeferReplyOptions, DeferralConfig, DeferrableInteraction};
use crate::utils::logging::{ExceptionLogger, Severity, TracingLogger};
use std::sync::Arc;

/// Routing and deferral settings shared by every component handler.
///
/// `id` is a prefix: a handler built with `"color_"` receives `"color_red"`,
/// `"color_blue"` and so on, as long as the interaction is of the variant's kind.
pub struct InteractionModel {
    id: String,
    variant: ComponentVariant,
    deferral: DeferralConfig,
    logger: Arc<dyn ExceptionLogger>,
}

impl InteractionModel {
    pub fn new(id: impl Into<String>, variant: ComponentVariant, deferral: DeferralConfig) -> Self {
        Self {
            id: id.into(),
            variant,
            deferral,
            logger: Arc::new(TracingLogger),
        }
    }

    pub fn button(id: impl Into<String>, deferral: DeferralConfig) -> Self {
        Self::new(id, ComponentVariant::Button, deferral)
    }

    pub fn string_select_menu(id: impl Into<String>, deferral: DeferralConfig) -> Self {
        Self::new(id, ComponentVariant::StringSelectMenu, deferral)
    }

    pub fn user_select_menu(id: impl Into<String>, deferral: DeferralConfig) -> Self {
        Self::new(id, ComponentVariant::UserSelectMenu, deferral)
    }

    pub fn role_select_menu(id: impl Into<String>, deferral: DeferralConfig) -> Self {
        Self::new(id, ComponentVariant::RoleSelectMenu, deferral)
    }

    pub fn mentionable_select_menu(id: impl Into<String>, deferral: DeferralConfig) -> Self {
        Self::new(id, ComponentVariant::MentionableSelectMenu, deferral)
    }

    pub fn channel_select_menu(id: impl Into<String>, deferral: DeferralConfig) -> Self {
        Self::new(id, ComponentVariant::ChannelSelectMenu, deferral)
    }

    /// String select menu that defers ephemerally after two seconds
    #[deprecated(note = "use InteractionModel::string_select_menu")]
    pub fn legacy_select_menu(id: impl Into<String>) -> Self {
        Self::string_select_menu(id, DeferralConfig::after(DEFAULT_DEFER_DELAY).ephemeral(true))
    }

    /// Replace the sink used for deferral failures
    pub fn with_logger(mut self, logger: Arc<dyn ExceptionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn variant(&self) -> ComponentVariant {
        self.variant
    }

    pub fn deferral(&self) -> DeferralConfig {
        self.deferral
    }

    pub fn can_handle<I: DeferrableInteraction + ?Sized>(
        &self,
        received_id: &str,
        interaction: &I,
    ) -> bool {
        received_id.starts_with(&self.id) && self.variant.accepts(interaction.kind())
    }

    /// Schedule a deferred reply if one is configured.
    ///
    /// Returns immediately. The timer cannot be cancelled; when it fires and the
    /// interaction is still unanswered, the reply is deferred. Failures go to the
    /// logger and are never returned.
    pub fn activate_deferred_reply<I: DeferrableInteraction + ?Sized>(&self, interaction: Arc<I>) {
        let Some(delay) = self.deferral.delay() else {
            return;
        };

        let options = DeferReplyOptions {
            ephemeral: self.deferral.is_ephemeral(),
        };
        let logger = Arc::clone(&self.logger);
        let handler_id = self.id.clone();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if interaction.replied() || interaction.deferred() {
                return;
            }

            tracing::debug!(
                "[DEFER] Deferring reply for '{}' (handler '{}') after {:?}",
                interaction.custom_id(),
                handler_id,
                delay
            );

            if let Err(e) = interaction.defer_reply(options).await {
                logger.exception("Error deferring reply", &e, Severity::Error);
            }
        });
    }
}

/// A handler for one family of component interactions.
///
/// Implementors provide the domain logic in [`handle`](Self::handle); callers go
/// through [`process`](Self::process), which arms the deferral timer first.
#[serenity::async_trait]
pub trait ComponentHandler<I: DeferrableInteraction + ?Sized>: Send + Sync {
    fn model(&self) -> &InteractionModel;

    fn can_handle(&self, received_id: &str, interaction: &I) -> bool {
        self.model().can_handle(received_id, interaction)
    }

    async fn handle(&self, interaction: Arc<I>) -> anyhow::Result<()>;

    async fn process(&self, interaction: Arc<I>) -> anyhow::Result<()> {
        self.model().activate_deferred_reply(Arc::clone(&interaction));
        self.handle(interaction).await
    }
}
