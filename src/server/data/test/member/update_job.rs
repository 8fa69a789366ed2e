use super::*;

/// Tests updating a member's job.
///
/// Expected: Ok(true) with the new job and promotion timestamp, join time unchanged
#[tokio::test]
async fn updates_job_and_promotion_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_member(db).await?;
    let promoted_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

    let repo = MemberRepository::new(db);
    let updated = repo
        .update_job(stored.id, Job::Recruit, Job::Cadet, promoted_at)
        .await?;
    assert!(updated);

    let member = repo
        .find_by_discord_id(stored.discord_id.parse().unwrap())
        .await?
        .unwrap();
    assert_eq!(member.job, Job::Cadet);
    assert_eq!(member.last_promoted_at, Some(promoted_at));
    assert_eq!(member.joined_at, stored.joined_at);
    assert_eq!(member.in_job_since(), promoted_at);

    Ok(())
}

/// Tests that the update is skipped when the member no longer holds the expected job.
///
/// Expected: Ok(false) and the stored job untouched
#[tokio::test]
async fn skips_when_job_already_changed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_member(db).await?;
    let promoted_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

    let repo = MemberRepository::new(db);
    assert!(
        repo.update_job(stored.id, Job::Recruit, Job::Cadet, promoted_at)
            .await?
    );
    let updated = repo
        .update_job(stored.id, Job::Recruit, Job::Cadet, promoted_at)
        .await?;

    assert!(!updated);
    let member = repo
        .find_by_discord_id(stored.discord_id.parse().unwrap())
        .await?
        .unwrap();
    assert_eq!(member.job, Job::Cadet);

    Ok(())
}

/// Tests updating a record that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn skips_missing_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let updated = repo
        .update_job(42, Job::Recruit, Job::Cadet, Utc::now())
        .await?;

    assert!(!updated);

    Ok(())
}
