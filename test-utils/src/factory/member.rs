//! Member factory for creating test member records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_discord_id;

/// Factory for creating test member records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .job("Officer")
///     .joined_at(Utc::now() - Duration::days(30))
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    job: String,
    joined_at: DateTime<Utc>,
    last_promoted_at: Option<DateTime<Utc>>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: unique snowflake-shaped ID
    /// - job: `"Recruit"`
    /// - joined_at: now
    /// - last_promoted_at: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            discord_id: next_discord_id(),
            job: "Recruit".to_string(),
            joined_at: Utc::now(),
            last_promoted_at: None,
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn job(mut self, job: impl Into<String>) -> Self {
        self.job = job.into();
        self
    }

    pub fn joined_at(mut self, joined_at: DateTime<Utc>) -> Self {
        self.joined_at = joined_at;
        self
    }

    pub fn last_promoted_at(mut self, last_promoted_at: DateTime<Utc>) -> Self {
        self.last_promoted_at = Some(last_promoted_at);
        self
    }

    /// Inserts the member record.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let now = Utc::now();

        entity::member::ActiveModel {
            id: ActiveValue::NotSet,
            discord_id: ActiveValue::Set(self.discord_id),
            job: ActiveValue::Set(self.job),
            joined_at: ActiveValue::Set(self.joined_at),
            last_promoted_at: ActiveValue::Set(self.last_promoted_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Recruit member record with default values.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}
