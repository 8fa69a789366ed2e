use chrono::Utc;
use serenity::all::{Context, Member, RoleId};

use crate::{
    model::organization::Job,
    server::{
        data::member::MemberRepository,
        error::AppError,
        model::member::CreateMemberParam,
        state::BotState,
        util::parse::{parse_role_id, timestamp_to_utc},
    },
};

/// Handles the guild_member_addition event when a member joins a guild
///
/// Grants every configured default role and enrolls the member at the entry job. Both
/// steps run independently so a failure to assign roles still records the member.
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, new_member: Member) {
    let discord_id = new_member.user.id.get();

    if let Err(e) = assign_default_roles(state, &ctx, &new_member).await {
        tracing::error!(
            "Failed to assign default roles to user {}: {:?}",
            discord_id,
            e
        );
    }

    let joined_at = match new_member.joined_at.map(timestamp_to_utc).transpose() {
        Ok(joined_at) => joined_at.unwrap_or_else(Utc::now),
        Err(e) => {
            tracing::error!("Failed to read join time of user {}: {:?}", discord_id, e);
            return;
        }
    };

    let member_repo = MemberRepository::new(&state.db);
    match member_repo
        .create_if_missing(CreateMemberParam {
            discord_id,
            job: Job::ENTRY,
            joined_at,
        })
        .await
    {
        Ok(member) => tracing::info!(
            "User {} joined guild {} as {}",
            new_member.user.name,
            new_member.guild_id,
            member.job
        ),
        Err(e) => tracing::error!("Failed to create member record for {}: {:?}", discord_id, e),
    }
}

async fn assign_default_roles(
    state: &BotState,
    ctx: &Context,
    new_member: &Member,
) -> Result<(), AppError> {
    let roles = state
        .config
        .default_roles
        .iter()
        .map(String::as_str)
        .map(parse_role_id)
        .collect::<Result<Vec<RoleId>, AppError>>()?;

    if roles.is_empty() {
        return Ok(());
    }

    new_member.add_roles(ctx, &roles).await?;

    tracing::debug!(
        "Assigned {} default roles to user {}",
        roles.len(),
        new_member.user.id
    );

    Ok(())
}
