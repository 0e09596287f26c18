use crate::bot::ComponentReply;
use crate::model::{ComponentHandler, DeferralConfig, InteractionModel};
use std::sync::Arc;

pub const PING_BUTTON_ID: &str = "ping";

pub struct PingButton {
    model: InteractionModel,
}

impl PingButton {
    pub fn new(deferral: DeferralConfig) -> Self {
        Self {
            model: InteractionModel::button(PING_BUTTON_ID, deferral),
        }
    }
}

#[serenity::async_trait]
impl ComponentHandler<ComponentReply> for PingButton {
    fn model(&self) -> &InteractionModel {
        &self.model
    }

    async fn handle(&self, interaction: Arc<ComponentReply>) -> anyhow::Result<()> {
        interaction.reply("Pong!", true).await?;
        Ok(())
    }
}
