//! Promotion data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::vocabulary::Vocabulary,
    server::{
        error::AppError,
        model::promotion::{CreatePromotionParam, Promotion},
    },
};

/// Repository providing database operations for promotion records.
pub struct PromotionRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PromotionRepository<'a, C> {
    /// Creates a new PromotionRepository instance on a connection or transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a promotion.
    ///
    /// # Arguments
    /// - `param` - Promoted member, jobs, promoter and time
    ///
    /// # Returns
    /// - `Ok(Promotion)` - The stored promotion
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePromotionParam) -> Result<Promotion, AppError> {
        let entity = entity::promotion::ActiveModel {
            id: ActiveValue::NotSet,
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            from_job: ActiveValue::Set(param.from_job.as_str().to_string()),
            to_job: ActiveValue::Set(param.to_job.as_str().to_string()),
            promoted_by: ActiveValue::Set(param.promoted_by.to_string()),
            promoted_at: ActiveValue::Set(param.promoted_at),
        }
        .insert(self.db)
        .await?;

        Promotion::from_entity(entity)
    }

    /// Gets the most recent promotion of a member.
    ///
    /// # Returns
    /// - `Ok(Some(Promotion))` - Latest promotion
    /// - `Ok(None)` - The member was never promoted
    /// - `Err(AppError)` - Database error or unparseable stored record
    pub async fn latest_by_discord_id(&self, discord_id: u64) -> Result<Option<Promotion>, AppError> {
        let entity = entity::prelude::Promotion::find()
            .filter(entity::promotion::Column::DiscordId.eq(discord_id.to_string()))
            .order_by_desc(entity::promotion::Column::PromotedAt)
            .order_by_desc(entity::promotion::Column::Id)
            .one(self.db)
            .await?;

        entity.map(Promotion::from_entity).transpose()
    }

    /// Deletes every promotion record of a Discord user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted records
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_by_discord_id(&self, discord_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::Promotion::delete_many()
            .filter(entity::promotion::Column::DiscordId.eq(discord_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
