//! Domain models for promotion records.

use chrono::{DateTime, Utc};

use crate::{
    model::{organization::Job, vocabulary::Vocabulary},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::parse_u64_from_string,
    },
};

/// A recorded promotion from one job to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    pub id: i32,
    /// Discord user ID of the promoted member.
    pub discord_id: u64,
    pub from_job: Job,
    pub to_job: Job,
    /// Discord user ID of the member who ran the promotion.
    pub promoted_by: u64,
    pub promoted_at: DateTime<Utc>,
}

impl Promotion {
    /// Converts an entity model to a promotion domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Promotion)` - The converted promotion domain model
    /// - `Err(AppError::InternalErr)` - A stored ID or job could not be parsed
    pub fn from_entity(entity: entity::promotion::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            discord_id: parse_u64_from_string(entity.discord_id)?,
            from_job: parse_job("from_job", entity.from_job)?,
            to_job: parse_job("to_job", entity.to_job)?,
            promoted_by: parse_u64_from_string(entity.promoted_by)?,
            promoted_at: entity.promoted_at,
        })
    }
}

fn parse_job(column: &'static str, value: String) -> Result<Job, InternalError> {
    Job::from_tag(&value).ok_or(InternalError::UnknownStoredTag { column, value })
}

/// Parameters for recording a promotion.
#[derive(Debug, Clone)]
pub struct CreatePromotionParam {
    pub discord_id: u64,
    pub from_job: Job,
    pub to_job: Job,
    pub promoted_by: u64,
    pub promoted_at: DateTime<Utc>,
}
