use component_models::bot::init::start_bot;
use component_models::utils::config::Settings;
use component_models::utils::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::from_env()?;
    start_bot(settings).await
}
