//! Maintenance operations over the bot's record collections.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{member::MemberRepository, promotion::PromotionRepository},
    error::AppError,
};

/// Number of records removed from each collection by a purge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PurgeSummary {
    pub members: u64,
    pub promotions: u64,
}

impl PurgeSummary {
    pub fn total(&self) -> u64 {
        self.members + self.promotions
    }
}

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    /// Creates a new MaintenanceService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes every record held about a Discord user.
    ///
    /// Removes the member record and the full promotion history of the user in one
    /// transaction. Records of other users are never touched.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID whose records are removed
    ///
    /// # Returns
    /// - `Ok(PurgeSummary)` - Number of deleted records per collection
    /// - `Err(AppError::DbErr)` - Database error during either delete
    pub async fn purge_member(&self, discord_id: u64) -> Result<PurgeSummary, AppError> {
        let txn = self.db.begin().await?;
        let promotions = PromotionRepository::new(&txn)
            .delete_by_discord_id(discord_id)
            .await?;
        let members = MemberRepository::new(&txn)
            .delete_by_discord_id(discord_id)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Purged {} member and {} promotion records of user {}",
            members,
            promotions,
            discord_id
        );

        Ok(PurgeSummary {
            members,
            promotions,
        })
    }
}
