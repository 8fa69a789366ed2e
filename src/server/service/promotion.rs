//! Promotion workflow driven by the promotion delay table.
//!
//! A member moves up the job ladder one rank at a time, and only after holding their
//! current job for at least that job's promotion delay. Members without a record yet
//! are enrolled at the entry rank from their guild join time before the checks run.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::organization::Job,
    server::{
        data::{member::MemberRepository, promotion::PromotionRepository},
        error::AppError,
        model::{
            member::{CreateMemberParam, Member},
            promotion::{CreatePromotionParam, Promotion},
        },
    },
};

/// Parameters for promoting a member.
#[derive(Debug, Clone)]
pub struct PromoteParam {
    /// Discord user ID of the member being promoted.
    pub discord_id: u64,
    /// Job the member is promoted to.
    pub target: Job,
    /// Discord user ID of the member running the promotion.
    pub promoted_by: u64,
    /// Guild join time, used when the member has no record yet.
    pub joined_at: DateTime<Utc>,
    /// Time the promotion takes effect.
    pub now: DateTime<Utc>,
}

/// Current standing of a member on the job ladder.
#[derive(Debug, Clone)]
pub struct MemberStatus {
    pub member: Member,
    pub latest_promotion: Option<Promotion>,
    /// When the member may be promoted next, `None` at the top of the ladder.
    pub eligible_at: Option<DateTime<Utc>>,
}

/// Computes when a member becomes eligible for their next promotion.
///
/// # Returns
/// - `Some(DateTime<Utc>)` - Start of the current job plus the job's promotion delay
/// - `None` - The member holds the highest job
pub fn eligible_at(member: &Member) -> Option<DateTime<Utc>> {
    member
        .job
        .promotion_delay()
        .map(|delay| member.in_job_since() + delay)
}

pub struct PromotionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PromotionService<'a> {
    /// Creates a new PromotionService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Promotes a member to the next job.
    ///
    /// The lookup, the checks and both writes run in one transaction, and the job
    /// change only applies while the member still holds the job that was checked.
    ///
    /// # Arguments
    /// - `param` - Member, target job, promoter, join time and promotion time
    ///
    /// # Returns
    /// - `Ok(Promotion)` - The recorded promotion
    /// - `Err(AppError::BadRequest)` - Self promotion, wrong target job, top of the
    ///   ladder, promotion delay not yet elapsed, or a concurrent promotion won
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn promote(&self, param: PromoteParam) -> Result<Promotion, AppError> {
        if param.promoted_by == param.discord_id {
            return Err(AppError::BadRequest(
                "You cannot promote yourself.".to_string(),
            ));
        }

        // Early returns drop `txn`, which rolls back the enrollment below
        let txn = self.db.begin().await?;
        let member_repo = MemberRepository::new(&txn);
        let member = member_repo
            .create_if_missing(CreateMemberParam {
                discord_id: param.discord_id,
                job: Job::ENTRY,
                joined_at: param.joined_at,
            })
            .await?;

        let Some(next) = member.job.next() else {
            return Err(AppError::BadRequest(format!(
                "{} is the highest job, there is nothing to promote to.",
                member.job
            )));
        };

        if param.target != next {
            return Err(AppError::BadRequest(format!(
                "A {} can only be promoted to {}.",
                member.job, next
            )));
        }

        if let Some(eligible_at) = eligible_at(&member) {
            if param.now < eligible_at {
                return Err(AppError::BadRequest(format!(
                    "Not eligible for promotion until <t:{}:F>.",
                    eligible_at.timestamp()
                )));
            }
        }

        let updated = member_repo
            .update_job(member.id, member.job, next, param.now)
            .await?;
        if !updated {
            return Err(AppError::BadRequest(
                "This member's job changed while the promotion was running, try again."
                    .to_string(),
            ));
        }

        let promotion = PromotionRepository::new(&txn)
            .create(CreatePromotionParam {
                discord_id: param.discord_id,
                from_job: member.job,
                to_job: next,
                promoted_by: param.promoted_by,
                promoted_at: param.now,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} promoted from {} to {} by {}",
            param.discord_id,
            member.job,
            next,
            param.promoted_by
        );

        Ok(promotion)
    }

    /// Gets a member's current standing.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID of the member
    ///
    /// # Returns
    /// - `Ok(MemberStatus)` - Record, latest promotion and next eligibility
    /// - `Err(AppError::NotFound)` - The bot holds no record for this user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn status(&self, discord_id: u64) -> Result<MemberStatus, AppError> {
        let member = MemberRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No record exists for this member.".to_string()))?;

        let latest_promotion = PromotionRepository::new(self.db)
            .latest_by_discord_id(discord_id)
            .await?;

        Ok(MemberStatus {
            eligible_at: eligible_at(&member),
            member,
            latest_promotion,
        })
    }
}
