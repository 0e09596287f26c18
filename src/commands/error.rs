use crate::bot::ComponentReply;
use crate::model::InteractionError;
use serenity::all::{
    Colour, CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

/// Message shown when a command or component handler fails
pub const GENERIC_ERROR: &str = "An unexpected error occurred. Please try again later.";

pub fn error_embed(error_message: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Error")
        .description(error_message)
        .color(Colour::RED)
}

/// Answer a slash command with an ephemeral error embed
pub async fn run(
    context: &Context,
    interaction: &CommandInteraction,
    error_message: &str,
) -> anyhow::Result<()> {
    let message = CreateInteractionResponseMessage::new()
        .embed(error_embed(error_message))
        .ephemeral(true);

    interaction
        .create_response(&context.http, CreateInteractionResponse::Message(message))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to send error response: {}", e))?;

    Ok(())
}

/// Answer a component interaction with an error embed, whether or not it was
/// already deferred or answered
pub async fn run_component(
    reply: &ComponentReply,
    error_message: &str,
) -> Result<(), InteractionError> {
    reply.reply_embed(error_embed(error_message), true).await
}
