use super::*;

/// Tests creating a record for a new member.
///
/// Expected: Ok with a Recruit record and no promotion timestamp
#[tokio::test]
async fn creates_new_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let joined_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let repo = MemberRepository::new(db);
    let member = repo
        .create_if_missing(CreateMemberParam {
            discord_id: 223344556677889900,
            job: Job::ENTRY,
            joined_at,
        })
        .await?;

    assert_eq!(member.discord_id, 223344556677889900);
    assert_eq!(member.job, Job::Recruit);
    assert_eq!(member.joined_at, joined_at);
    assert_eq!(member.last_promoted_at, None);

    Ok(())
}

/// Tests that an existing record is returned untouched.
///
/// Verifies that a rejoining member keeps their job instead of being reset to the
/// entry rank, and that no duplicate row is inserted.
///
/// Expected: Ok with the original record, one row in the table
#[tokio::test]
async fn keeps_existing_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::member::MemberFactory::new(db)
        .job("Captain")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let member = repo
        .create_if_missing(CreateMemberParam {
            discord_id: stored.discord_id.parse().unwrap(),
            job: Job::ENTRY,
            joined_at: Utc::now(),
        })
        .await?;

    assert_eq!(member.id, stored.id);
    assert_eq!(member.job, Job::Captain);

    let count = entity::prelude::Member::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
