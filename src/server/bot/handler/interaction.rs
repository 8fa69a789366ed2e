use serenity::all::{Context, Interaction};

use crate::server::{bot::command, state::BotState};

/// Handles the interaction_create event, dispatching slash commands
///
/// A failed command is answered with an error embed. Errors meant for the invoking
/// member are shown as-is; anything else is logged and replaced by a generic message.
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Received /{} from user {}",
        command.data.name,
        command.user.id
    );

    if let Err(e) = command::dispatch(state, &ctx, &command).await {
        let message = e.reply_message();

        if let Err(e) = command::reply_error(&ctx, &command, &message).await {
            tracing::error!(
                "Failed to send error reply for /{}: {:?}",
                command.data.name,
                e
            );
        }
    }
}
