use crate::bot::Handler;
use crate::utils::config::Settings;
use anyhow::Result;
use serenity::prelude::*;

/// Initialize and start the Discord bot
pub async fn start_bot(settings: Settings) -> Result<()> {
    tracing::info!("[INIT] Starting component bot");

    match settings.deferral.delay() {
        Some(delay) => tracing::info!(
            "[INIT] Replies are deferred after {:?} (ephemeral: {})",
            delay,
            settings.deferral.is_ephemeral()
        ),
        None => tracing::info!("[INIT] Automatic reply deferral is disabled"),
    }

    let handler = Handler::new(&settings);
    tracing::info!(
        "[INIT] Registered {} component handlers",
        handler.router.len()
    );

    let mut client = Client::builder(&settings.discord_token, GatewayIntents::empty())
        .event_handler(handler)
        .await?;

    if let Err(why) = client.start().await {
        tracing::error!("[ERROR] Discord client error: {why:?}");
    }

    Ok(())
}
