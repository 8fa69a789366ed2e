//! Member data repository for database operations.
//!
//! This module provides the `MemberRepository` for managing member records. Member
//! records track each organization member's current job and the timestamps the
//! promotion workflow relies on. Entity models are converted to domain models at this
//! boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    model::{organization::Job, vocabulary::Vocabulary},
    server::{
        error::AppError,
        model::member::{CreateMemberParam, Member},
    },
};

/// Repository providing database operations for member records.
///
/// Works on the connection pool or on an open transaction.
pub struct MemberRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `MemberRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a member record by Discord user ID.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID of the member
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member record found
    /// - `Ok(None)` - No record exists for this user
    /// - `Err(AppError)` - Database error or unparseable stored record
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<Member>, AppError> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::DiscordId.eq(discord_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(Member::from_entity).transpose()
    }

    /// Returns the member record for a user, creating it if none exists.
    ///
    /// An existing record is returned untouched, so rejoining members keep their job
    /// and promotion history.
    ///
    /// # Arguments
    /// - `param` - Discord ID, starting job and join time for a new record
    ///
    /// # Returns
    /// - `Ok(Member)` - The existing or newly created record
    /// - `Err(AppError)` - Database error during lookup or insert
    pub async fn create_if_missing(&self, param: CreateMemberParam) -> Result<Member, AppError> {
        if let Some(existing) = self.find_by_discord_id(param.discord_id).await? {
            return Ok(existing);
        }

        let now = Utc::now();
        let entity = entity::member::ActiveModel {
            id: ActiveValue::NotSet,
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            job: ActiveValue::Set(param.job.as_str().to_string()),
            joined_at: ActiveValue::Set(param.joined_at),
            last_promoted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Member::from_entity(entity)
    }

    /// Moves a member from one job to another and records when it changed.
    ///
    /// The update only applies while the member still holds `from`, so two promotions
    /// racing on the same record cannot both succeed.
    ///
    /// # Arguments
    /// - `id` - Member record ID
    /// - `from` - Job the member is expected to hold
    /// - `to` - New job
    /// - `promoted_at` - Time of the promotion
    ///
    /// # Returns
    /// - `Ok(true)` - The job was changed
    /// - `Ok(false)` - No record with this ID holds `from` anymore
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_job(
        &self,
        id: i32,
        from: Job,
        to: Job,
        promoted_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Member::update_many()
            .col_expr(entity::member::Column::Job, Expr::value(to.as_str()))
            .col_expr(
                entity::member::Column::LastPromotedAt,
                Expr::value(promoted_at),
            )
            .col_expr(entity::member::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::member::Column::Id.eq(id))
            .filter(entity::member::Column::Job.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes every member record belonging to a Discord user.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID whose records are removed
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted records
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_by_discord_id(&self, discord_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::Member::delete_many()
            .filter(entity::member::Column::DiscordId.eq(discord_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
