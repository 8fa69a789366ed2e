use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::{
    model::embed::EmbedColor,
    server::{
        bot::command::{embed, respond, user_option},
        error::AppError,
        service::maintenance::MaintenanceService,
        state::BotState,
    },
};

pub const NAME: &str = "purge";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Delete every record held about a member")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "member", "Member to purge")
                .required(true),
        )
}

/// Deletes the member record and promotion history of the selected user.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let (user, _) = user_option(command, "member")?;

    let summary = MaintenanceService::new(&state.db)
        .purge_member(user.id.get())
        .await?;

    let color = if summary.total() == 0 {
        EmbedColor::Warning
    } else {
        EmbedColor::Success
    };
    let result = embed(color, "Purge complete")
        .description(format!("Removed {} records of <@{}>.", summary.total(), user.id))
        .field("Member records", summary.members.to_string(), true)
        .field("Promotions", summary.promotions.to_string(), true);

    respond(ctx, command, result, true).await
}
