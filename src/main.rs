mod model;
mod server;

use std::sync::Arc;

use crate::server::{bot, config::Config, error::AppError, startup, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // Logging is configured from the environment, so a failure here can only go to stderr
    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing(&config);
    tracing::info!(
        "Starting hierarchy bot ({}), log level {} ({})",
        config.environment,
        config.log_level,
        config.log_level.ordinal()
    );

    let db = startup::connect_to_database(&config).await?;
    let state = BotState::new(db, config);

    let client = bot::start::init_bot(state).await?;
    bot::start::start_bot(client).await?;

    Ok(())
}
