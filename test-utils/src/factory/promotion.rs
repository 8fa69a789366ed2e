//! Promotion factory for creating test promotion records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_discord_id;

/// Factory for creating test promotion records with customizable fields.
pub struct PromotionFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    from_job: String,
    to_job: String,
    promoted_by: String,
    promoted_at: DateTime<Utc>,
}

impl<'a> PromotionFactory<'a> {
    /// Creates a new PromotionFactory for the given member.
    ///
    /// Defaults:
    /// - from_job: `"Recruit"`, to_job: `"Cadet"`
    /// - promoted_by: unique snowflake-shaped ID
    /// - promoted_at: now
    pub fn new(db: &'a DatabaseConnection, discord_id: impl Into<String>) -> Self {
        Self {
            db,
            discord_id: discord_id.into(),
            from_job: "Recruit".to_string(),
            to_job: "Cadet".to_string(),
            promoted_by: next_discord_id(),
            promoted_at: Utc::now(),
        }
    }

    pub fn jobs(mut self, from_job: impl Into<String>, to_job: impl Into<String>) -> Self {
        self.from_job = from_job.into();
        self.to_job = to_job.into();
        self
    }

    pub fn promoted_at(mut self, promoted_at: DateTime<Utc>) -> Self {
        self.promoted_at = promoted_at;
        self
    }

    /// Inserts the promotion record.
    pub async fn build(self) -> Result<entity::promotion::Model, DbErr> {
        entity::promotion::ActiveModel {
            id: ActiveValue::NotSet,
            discord_id: ActiveValue::Set(self.discord_id),
            from_job: ActiveValue::Set(self.from_job),
            to_job: ActiveValue::Set(self.to_job),
            promoted_by: ActiveValue::Set(self.promoted_by),
            promoted_at: ActiveValue::Set(self.promoted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Recruit to Cadet promotion record for the given member.
pub async fn create_promotion(
    db: &DatabaseConnection,
    discord_id: &str,
) -> Result<entity::promotion::Model, DbErr> {
    PromotionFactory::new(db, discord_id).build().await
}
