// This is the entry point of the champion build bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Implementations of core traits (Data Dragon, op.gg)
// - `discord/` = Discord-specific adapters (commands, events)
// - `config/` = Startup configuration from the environment
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands and event handlers

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with several mod.rs files that all look the same.
#[path = "config/bot_config.rs"]
mod config;
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::config::BotConfig;
use crate::core::builds::BuildCommand;
use crate::core::champions::ChampionCatalog;
use crate::core::moderation::CommandModerator;
use crate::core::thumbnails::ThumbnailResolver;
use crate::discord::commands::presence;
use crate::discord::moderation as command_cleanup;
use crate::discord::{Data, Error};
use crate::infra::builds::OpggScraper;
use crate::infra::champions::DataDragonClient;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

/// Event handler for non-command Discord events.
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        command_cleanup::handle_message(ctx, new_message, &data.moderator).await;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}. Create a .env file with DISCORD_TOKEN and RIOT_API_KEY.", e);
            std::process::exit(1);
        }
    };

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // This is the "composition root" where we wire everything together.

    let ddragon = DataDragonClient::new(
        &config.riot_api_key,
        config.ddragon_base_url.as_str(),
        config.realm.as_str(),
        config.request_timeout,
    )
    .expect("Failed to create Data Dragon client");

    let scraper = OpggScraper::new(format!("https://{}", config.scrape_host), config.request_timeout)
        .expect("Failed to create build scraper");

    let build_command = Arc::new(BuildCommand::new(
        ChampionCatalog::new(ddragon),
        scraper,
        ThumbnailResolver::new(config.thumbnail_base_url.as_str()),
        config.prefix,
    ));

    let moderator = Arc::new(CommandModerator::new(
        config.prefix,
        config.moderate_bot_messages,
    ));

    let data = Data {
        builds: Arc::clone(&build_command),
        moderator: Arc::clone(&moderator),
        prefix: config.prefix,
    };

    tracing::info!(
        prefix = %config.prefix,
        region = %config.region,
        scrape_host = %config.scrape_host,
        "Services initialized"
    );

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read message content
        | serenity::GatewayIntents::GUILDS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![discord::commands::build::build(), discord::commands::quit::quit()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.prefix.to_string()),
                ..Default::default()
            },
            // Event handler for message cleanup
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                tracing::info!(user = %ready.user.name, "Bot is starting up");

                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                tracing::info!("Commands registered, bot is ready");
                presence::on_ready(ctx, data.prefix);

                Ok(data)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
        .expect("Error creating client");

    client.start().await.expect("Error running bot");
}
