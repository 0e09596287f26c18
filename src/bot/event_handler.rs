use crate::bot::{ComponentReply, Handler, command_registry, helpers::command_handler};
use crate::commands;
use serenity::all::{Command, Interaction, Ready};
use serenity::prelude::*;
use std::sync::Arc;

#[serenity::async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, context: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => {
                if let Err(e) = command_handler::handle_slash_command(&context, &command).await {
                    tracing::error!("[ERROR] There was an error processing your command: {}", e);

                    if let Err(send_err) =
                        commands::error::run(&context, &command, commands::error::GENERIC_ERROR)
                            .await
                    {
                        tracing::error!("[ERROR] Failed to send error response to user: {}", send_err);
                    }
                }
            }

            Interaction::Component(component) => {
                let reply = Arc::new(ComponentReply::new(Arc::clone(&context.http), component));

                if let Err(e) = self.router.route(Arc::clone(&reply)).await {
                    tracing::error!(
                        "[ERROR] There was an error processing your interaction: {}",
                        e
                    );

                    if let Err(send_err) =
                        commands::error::run_component(&reply, commands::error::GENERIC_ERROR)
                            .await
                    {
                        tracing::error!(
                            "[ERROR] Failed to send component error response to user: {}",
                            send_err
                        );
                    }
                }
            }

            _ => {}
        }
    }

    async fn ready(&self, context: Context, ready: Ready) {
        tracing::info!("[BOT] {} is ready and connected!", ready.user.name);

        let commands_vec = command_registry::get_all_commands();
        let command_count = commands_vec.len();

        match Command::set_global_commands(&context, commands_vec).await {
            Ok(_) => tracing::info!(
                "[CMD] Successfully registered {} global commands",
                command_count
            ),
            Err(e) => tracing::error!("[ERROR] Failed to register global commands: {}", e),
        }
    }
}
