use super::*;

/// Tests recording a promotion.
///
/// Expected: Ok with every field stored and converted back
#[tokio::test]
async fn records_promotion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let promoted_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let repo = PromotionRepository::new(db);
    let promotion = repo
        .create(CreatePromotionParam {
            discord_id: 223344556677889900,
            from_job: Job::Officer,
            to_job: Job::Corporal,
            promoted_by: 112233445566778899,
            promoted_at,
        })
        .await?;

    assert_eq!(promotion.discord_id, 223344556677889900);
    assert_eq!(promotion.from_job, Job::Officer);
    assert_eq!(promotion.to_job, Job::Corporal);
    assert_eq!(promotion.promoted_by, 112233445566778899);
    assert_eq!(promotion.promoted_at, promoted_at);

    assert_eq!(entity::prelude::Promotion::find().count(db).await?, 1);

    Ok(())
}
