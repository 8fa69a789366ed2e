use super::*;

/// Tests finding an existing member record.
///
/// Expected: Ok(Some) with the stored job converted to the vocabulary member
#[tokio::test]
async fn finds_existing_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::member::MemberFactory::new(db)
        .job("Sergeant")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let member = repo
        .find_by_discord_id(stored.discord_id.parse().unwrap())
        .await?;

    let member = member.unwrap();
    assert_eq!(member.id, stored.id);
    assert_eq!(member.job, Job::Sergeant);
    assert_eq!(member.last_promoted_at, None);

    Ok(())
}

/// Tests looking up a user without a record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo.find_by_discord_id(123456789012345678).await?;

    assert!(member.is_none());

    Ok(())
}

/// Tests that a stored job outside the vocabulary is surfaced as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_job() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::member::MemberFactory::new(db)
        .job("Janitor")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let result = repo
        .find_by_discord_id(stored.discord_id.parse().unwrap())
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
