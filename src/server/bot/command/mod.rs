//! Slash commands exposed by the bot.
//!
//! Every command module provides a `NAME`, a `register` function building its
//! definition and a `run` function executing it. Commands return `AppError` on failure;
//! the interaction handler turns that into a danger embed.

pub mod ping;
pub mod ping_database;
pub mod promote;
pub mod purge;
pub mod status;

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, GuildId, PartialMember,
    ResolvedValue, User,
};

use crate::{
    model::embed::EmbedColor,
    server::{error::AppError, state::BotState},
};

/// Definitions of every slash command, registered globally when the bot connects.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        ping::register(),
        ping_database::register(),
        purge::register(),
        promote::register(),
        status::register(),
    ]
}

/// Runs the command matching the interaction's name.
///
/// # Returns
/// - `Ok(())` - The command ran and replied
/// - `Err(AppError::NotFound)` - No command with that name is known
/// - `Err(AppError)` - The command failed
pub async fn dispatch(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        ping::NAME => ping::run(ctx, command).await,
        ping_database::NAME => ping_database::run(state, ctx, command).await,
        purge::NAME => purge::run(state, ctx, command).await,
        promote::NAME => promote::run(state, ctx, command).await,
        status::NAME => status::run(state, ctx, command).await,
        other => Err(AppError::NotFound(format!("Unknown command /{other}."))),
    }
}

/// Creates an embed with a title and the colour of its kind.
pub fn embed(color: EmbedColor, title: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new().title(title).color(color.value())
}

/// Sends the initial response to a command.
pub async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
    ephemeral: bool,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .embed(embed)
        .ephemeral(ephemeral);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Replies to a failed command with a danger embed visible only to the invoker.
///
/// Falls back to a followup message when the command already sent its initial response.
pub async fn reply_error(
    ctx: &Context,
    command: &CommandInteraction,
    message: &str,
) -> Result<(), AppError> {
    let error_embed = || embed(EmbedColor::Danger, "Error").description(message);

    if respond(ctx, command, error_embed(), true).await.is_ok() {
        return Ok(());
    }

    command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .embed(error_embed())
                .ephemeral(true),
        )
        .await?;

    Ok(())
}

/// Guild the command was run in.
///
/// # Returns
/// - `Ok(GuildId)` - The guild
/// - `Err(AppError::BadRequest)` - The command was run in a direct message
pub fn guild_id(command: &CommandInteraction) -> Result<GuildId, AppError> {
    command
        .guild_id
        .ok_or_else(|| AppError::BadRequest("This command can only be used in a server.".to_string()))
}

/// Reads a required user option together with the user's guild membership, if any.
pub fn user_option<'a>(
    command: &'a CommandInteraction,
    name: &str,
) -> Result<(&'a User, Option<&'a PartialMember>), AppError> {
    for option in command.data.options() {
        if option.name != name {
            continue;
        }
        if let ResolvedValue::User(user, member) = option.value {
            return Ok((user, member));
        }
    }

    Err(AppError::BadRequest(format!("Missing option '{name}'.")))
}

/// Reads a required string option.
pub fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Result<&'a str, AppError> {
    for option in command.data.options() {
        if option.name != name {
            continue;
        }
        if let ResolvedValue::String(value) = option.value {
            return Ok(value);
        }
    }

    Err(AppError::BadRequest(format!("Missing option '{name}'.")))
}

/// Joins display names, or returns a placeholder when there are none.
pub fn list_or_none<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        return "None".to_string();
    }

    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
