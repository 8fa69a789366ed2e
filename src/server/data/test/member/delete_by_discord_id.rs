use super::*;

/// Tests deleting a member's record.
///
/// Verifies that only the target member's record is removed.
///
/// Expected: Ok(1) and the other member's record kept
#[tokio::test]
async fn deletes_only_target_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let deleted = repo
        .delete_by_discord_id(target.discord_id.parse().unwrap())
        .await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::Member::find_by_id(target.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Member::find_by_id(other.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting when no record matches.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deletes_nothing_for_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let deleted = repo.delete_by_discord_id(998877665544332211).await?;

    assert_eq!(deleted, 0);
    assert_eq!(entity::prelude::Member::find().count(db).await?, 1);

    Ok(())
}
