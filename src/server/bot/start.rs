use serenity::all::{Client, GatewayIntents, ShardManager};
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

use crate::server::{bot::handler::Handler, error::AppError, state::BotState};

/// Type map key giving commands access to the shard manager, used to read gateway latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// Initializes the Discord bot client without starting it
///
/// Builds the client with the bot token from configuration and stores the shard manager
/// in the client's type map so `/ping` can report the gateway heartbeat latency.
///
/// # Arguments
/// - `state` - Shared bot state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - The initialized Discord client
/// - `Err(AppError)` - Client initialization failed
pub async fn init_bot(state: BotState) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let token = state.config.discord_token.clone();
    let handler = Handler::new(state);

    let client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
    }

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Connects to the gateway and processes events until the client shuts down.
///
/// # Arguments
/// - `client` - Client returned by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
