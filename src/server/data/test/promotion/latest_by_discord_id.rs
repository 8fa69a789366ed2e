use super::*;

/// Tests that the most recent promotion is returned.
///
/// Expected: Ok(Some) with the later of two promotions
#[tokio::test]
async fn returns_most_recent_promotion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let first_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

    factory::promotion::PromotionFactory::new(db, &member.discord_id)
        .jobs("Cadet", "Officer")
        .promoted_at(first_at + Duration::days(10))
        .build()
        .await?;
    factory::promotion::PromotionFactory::new(db, &member.discord_id)
        .jobs("Recruit", "Cadet")
        .promoted_at(first_at)
        .build()
        .await?;

    let repo = PromotionRepository::new(db);
    let latest = repo
        .latest_by_discord_id(member.discord_id.parse().unwrap())
        .await?
        .unwrap();

    assert_eq!(latest.to_job, Job::Officer);

    Ok(())
}

/// Tests a member who was never promoted.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_promotions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    factory::create_promotion(db, &other.discord_id).await?;

    let repo = PromotionRepository::new(db);
    let latest = repo
        .latest_by_discord_id(member.discord_id.parse().unwrap())
        .await?;

    assert!(latest.is_none());

    Ok(())
}
