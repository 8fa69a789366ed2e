use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Promotion::Table)
                    .if_not_exists()
                    .col(pk_auto(Promotion::Id))
                    .col(string(Promotion::DiscordId))
                    .col(string(Promotion::FromJob))
                    .col(string(Promotion::ToJob))
                    .col(string(Promotion::PromotedBy))
                    .col(timestamp(Promotion::PromotedAt))
                    .to_owned(),
            )
            .await?;

        // Promotions are always looked up and purged by member
        manager
            .create_index(
                Index::create()
                    .name("idx_promotion_discord_id")
                    .table(Promotion::Table)
                    .col(Promotion::DiscordId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_promotion_discord_id")
                    .table(Promotion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Promotion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Promotion {
    Table,
    Id,
    DiscordId,
    FromJob,
    ToJob,
    PromotedBy,
    PromotedAt,
}
