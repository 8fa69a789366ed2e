use chrono::Utc;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateMessage, GuildId, Permissions,
};

use crate::{
    model::{
        embed::EmbedColor, notification::NotificationChannel, organization::Job,
        vocabulary::Vocabulary,
    },
    server::{
        bot::command::{embed, guild_id, respond, string_option, user_option},
        error::AppError,
        service::promotion::{PromoteParam, PromotionService},
        state::BotState,
        util::parse::timestamp_to_utc,
    },
};

pub const NAME: &str = "promote";

pub fn register() -> CreateCommand {
    let mut job = CreateCommandOption::new(CommandOptionType::String, "job", "Job to promote to")
        .required(true);
    for target in Job::ALL.iter().filter(|j| **j != Job::ENTRY) {
        job = job.add_string_choice(target.as_str(), target.as_str());
    }

    CreateCommand::new(NAME)
        .description("Promote a member to the next job")
        .default_member_permissions(Permissions::MANAGE_ROLES)
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "member", "Member to promote")
                .required(true),
        )
        .add_option(job)
}

/// Promotes the selected member and announces it in the promotions channel.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_id(command)?;
    let (user, member) = user_option(command, "member")?;
    let job = string_option(command, "job")?;

    let target = Job::from_tag(job)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown job '{job}'.")))?;

    let now = Utc::now();
    let joined_at = match member.and_then(|m| m.joined_at) {
        Some(joined_at) => timestamp_to_utc(joined_at)?,
        None => now,
    };

    let promotion = PromotionService::new(&state.db)
        .promote(PromoteParam {
            discord_id: user.id.get(),
            target,
            promoted_by: command.user.id.get(),
            joined_at,
            now,
        })
        .await?;

    let announcement = embed(EmbedColor::Success, "Promotion")
        .description(format!(
            "<@{}> was promoted by <@{}>.",
            promotion.discord_id, promotion.promoted_by
        ))
        .field("From", promotion.from_job.as_str(), true)
        .field("To", promotion.to_job.as_str(), true);

    if let Err(e) = notify(ctx, guild_id, announcement.clone()).await {
        tracing::warn!("Failed to post promotion notification: {:?}", e);
    }

    respond(ctx, command, announcement, false).await
}

/// Posts an embed to the guild's promotions channel, if the guild has one.
async fn notify(ctx: &Context, guild_id: GuildId, announcement: CreateEmbed) -> Result<(), AppError> {
    let name = NotificationChannel::Promotions.channel_name();
    let channels = guild_id.channels(&ctx.http).await?;

    let Some(channel) = channels.values().find(|channel| channel.name == name) else {
        tracing::debug!("Guild {} has no #{} channel", guild_id, name);
        return Ok(());
    };

    channel
        .id
        .send_message(&ctx.http, CreateMessage::new().embed(announcement))
        .await?;

    Ok(())
}
