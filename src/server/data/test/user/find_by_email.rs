use super::*;
use test_utils::factory::user::UserFactory;

/// Tests matching a Google account email to an existing local account.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("carol")
        .email("carol@gmail.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("carol@gmail.com").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().username, "carol");

    Ok(())
}

/// Tests querying for an email that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("nobody@gmail.com").await?;

    assert!(user.is_none());

    Ok(())
}
