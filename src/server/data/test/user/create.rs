use super::*;

/// Tests creating a user with valid parameters.
///
/// Verifies that the repository inserts the row and returns the new user
/// with a generated id and all fields intact.
///
/// Expected: Ok(User) with matching fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@gmail.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@gmail.com");
    assert_eq!(user.password_hash, "$argon2id$fake");

    Ok(())
}

/// Tests that the unique username column rejects duplicates.
///
/// The service checks for duplicates before creating, but a race still
/// surfaces here as a database error rather than a second row.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create(CreateUserParams {
        username: "alice".to_string(),
        email: "alice@gmail.com".to_string(),
        password_hash: "hash-one".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "other@gmail.com".to_string(),
            password_hash: "hash-two".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
