use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// Log events below the configured `LOG_LEVEL` are discarded. Must be called once,
/// after the configuration has been validated.
///
/// # Arguments
/// - `config` - Application configuration containing the minimum log severity
pub fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_max_level(config.log_level.level_filter())
        .with_target(false)
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the bot can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
