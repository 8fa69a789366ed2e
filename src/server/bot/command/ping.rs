use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};
use std::time::{Duration, Instant};

use crate::{
    model::embed::EmbedColor,
    server::{
        bot::{
            command::{embed, respond},
            start::ShardManagerContainer,
        },
        error::AppError,
    },
};

pub const NAME: &str = "ping";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show the bot's gateway and round-trip latency")
}

/// Replies with the gateway heartbeat latency and the time taken by the initial response.
pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let gateway = gateway_latency(ctx).await;

    let started = Instant::now();
    respond(ctx, command, embed(EmbedColor::Info, "Pinging..."), false).await?;
    let round_trip = started.elapsed();

    let result = embed(EmbedColor::Success, "Pong!")
        .field("Gateway", format_latency(gateway), true)
        .field("Round trip", format_latency(Some(round_trip)), true);

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(result))
        .await?;

    Ok(())
}

async fn gateway_latency(ctx: &Context) -> Option<Duration> {
    let data = ctx.data.read().await;
    let manager = data.get::<ShardManagerContainer>()?;
    let runners = manager.runners.lock().await;

    let latency = runners.get(&ctx.shard_id).and_then(|runner| runner.latency);
    latency
}

/// Formats a latency in milliseconds; no heartbeat has been acknowledged yet when `None`.
pub fn format_latency(latency: Option<Duration>) -> String {
    match latency {
        Some(latency) => format!("{} ms", latency.as_millis()),
        None => "N/A".to_string(),
    }
}
