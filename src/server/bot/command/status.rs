use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption, RoleId,
};

use crate::{
    model::embed::EmbedColor,
    server::{
        bot::command::{embed, guild_id, list_or_none, respond, user_option},
        config::Config,
        error::AppError,
        service::promotion::PromotionService,
        state::BotState,
    },
};

pub const NAME: &str = "status";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show a member's job, assignments and promotion eligibility")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "member", "Member to look up")
                .required(true),
        )
}

/// Summary of the configured groups a member belongs to, resolved from their roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignments {
    pub sectors: String,
    pub systems: String,
    pub committees: String,
}

impl Assignments {
    /// Resolves sectors, systems and committees from the member's Discord role IDs.
    pub fn resolve(config: &Config, role_ids: &[RoleId]) -> Self {
        Self {
            sectors: list_or_none(&config.sectors_roles.matching(role_ids)),
            systems: list_or_none(&config.systems_roles.matching(role_ids)),
            committees: list_or_none(&config.committees_roles.matching(role_ids)),
        }
    }
}

/// Replies with the selected member's standing.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    guild_id(command)?;
    let (user, member) = user_option(command, "member")?;

    let status = PromotionService::new(&state.db)
        .status(user.id.get())
        .await?;

    let role_ids = member.map(|m| m.roles.as_slice()).unwrap_or_default();
    let assignments = Assignments::resolve(&state.config, role_ids);

    let last_promotion = match &status.latest_promotion {
        Some(promotion) => format!(
            "{} to {}, <t:{}:R>",
            promotion.from_job,
            promotion.to_job,
            promotion.promoted_at.timestamp()
        ),
        None => "Never".to_string(),
    };
    let next_promotion = match (status.member.job.next(), status.eligible_at) {
        (Some(next), Some(eligible_at)) => {
            format!("{} from <t:{}:F>", next, eligible_at.timestamp())
        }
        _ => "Highest job reached".to_string(),
    };

    let result = embed(EmbedColor::Info, format!("Status of {}", user.name))
        .field("Job", status.member.job.to_string(), true)
        .field(
            "Member since",
            format!("<t:{}:D>", status.member.joined_at.timestamp()),
            true,
        )
        .field("Sectors", assignments.sectors, false)
        .field("Systems", assignments.systems, false)
        .field("Committees", assignments.committees, false)
        .field("Last promotion", last_promotion, false)
        .field("Next promotion", next_promotion, false);

    respond(ctx, command, result, true).await
}
