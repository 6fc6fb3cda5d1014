mod bot;
mod config;
mod morning;
mod platform;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,morningbot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded successfully");

    // Stemmer tables must be usable before polling starts
    let detector = morning::init().context("Failed to load Russian language resources")?;
    info!("Language resources ready");

    let bot = teloxide::Bot::new(&config.bot_token);

    info!("Bot is starting...");
    platform::telegram::run(bot, detector).await?;

    Ok(())
}
