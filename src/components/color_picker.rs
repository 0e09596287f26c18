use crate::bot::ComponentReply;
use crate::model::{ComponentHandler, DeferralConfig, InteractionModel};
use std::sync::Arc;

pub const COLOR_PICKER_ID: &str = "color_picker";

pub const COLORS: &[(&str, &str)] = &[("Red", "red"), ("Green", "green"), ("Blue", "blue")];

pub struct ColorPicker {
    model: InteractionModel,
}

impl ColorPicker {
    pub fn new(deferral: DeferralConfig) -> Self {
        Self {
            model: InteractionModel::string_select_menu(COLOR_PICKER_ID, deferral),
        }
    }
}

fn describe_selection(values: &[String]) -> String {
    if values.is_empty() {
        "You didn't pick any color.".to_string()
    } else {
        format!("You picked: {}", values.join(", "))
    }
}

#[serenity::async_trait]
impl ComponentHandler<ComponentReply> for ColorPicker {
    fn model(&self) -> &InteractionModel {
        &self.model
    }

    async fn handle(&self, interaction: Arc<ComponentReply>) -> anyhow::Result<()> {
        let values = interaction.selected_values();
        tracing::info!("[COLOR] {} color(s) selected", values.len());

        interaction.reply(describe_selection(&values), true).await?;
        Ok(())
    }
}
