use serenity::all::{CommandInteraction, Context, CreateCommand};
use std::time::Instant;

use crate::{
    model::embed::EmbedColor,
    server::{
        bot::command::{embed, ping::format_latency, respond},
        error::AppError,
        state::BotState,
    },
};

pub const NAME: &str = "ping-database";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Check the database connection")
}

/// Pings the database and replies with the time it took.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let started = Instant::now();
    state.db.ping().await?;
    let elapsed = started.elapsed();

    let result = embed(EmbedColor::Success, "Database reachable")
        .field("Latency", format_latency(Some(elapsed)), true);

    respond(ctx, command, result, false).await
}
