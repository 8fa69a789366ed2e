//! Domain models for member records.

use chrono::{DateTime, Utc};

use crate::{
    model::{organization::Job, vocabulary::Vocabulary},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::parse_u64_from_string,
    },
};

/// Organization member tracked by the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Unique identifier for the member record.
    pub id: i32,
    /// Discord user ID of the member.
    pub discord_id: u64,
    /// Current job on the ladder.
    pub job: Job,
    /// When the member joined the organization.
    pub joined_at: DateTime<Utc>,
    /// When the member was last promoted, `None` if never.
    pub last_promoted_at: Option<DateTime<Utc>>,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Member)` - The converted member domain model
    /// - `Err(AppError::InternalErr)` - Stored discord_id or job could not be parsed
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, AppError> {
        let job = Job::from_tag(&entity.job).ok_or(InternalError::UnknownStoredTag {
            column: "job",
            value: entity.job.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            discord_id: parse_u64_from_string(entity.discord_id)?,
            job,
            joined_at: entity.joined_at,
            last_promoted_at: entity.last_promoted_at,
        })
    }

    /// Start of the member's time in their current job.
    pub fn in_job_since(&self) -> DateTime<Utc> {
        self.last_promoted_at.unwrap_or(self.joined_at)
    }
}

/// Parameters for creating a member record.
#[derive(Debug, Clone)]
pub struct CreateMemberParam {
    pub discord_id: u64,
    pub job: Job,
    pub joined_at: DateTime<Utc>,
}
