use super::*;

/// Tests deleting every promotion of a member.
///
/// Expected: Ok(2) with the other member's promotion kept
#[tokio::test]
async fn deletes_all_promotions_of_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    factory::create_promotion(db, &target.discord_id).await?;
    factory::promotion::PromotionFactory::new(db, &target.discord_id)
        .jobs("Cadet", "Officer")
        .build()
        .await?;
    factory::create_promotion(db, &other.discord_id).await?;

    let repo = PromotionRepository::new(db);
    let deleted = repo
        .delete_by_discord_id(target.discord_id.parse().unwrap())
        .await?;

    assert_eq!(deleted, 2);
    assert_eq!(entity::prelude::Promotion::find().count(db).await?, 1);

    Ok(())
}
