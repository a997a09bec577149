use super::*;

/// Tests a logged-in user successfully passes the guard.
///
/// Verifies that the AuthGuard returns the user when the session carries a
/// user id that exists in the database.
///
/// Expected: Ok(User) with matching data
#[tokio::test]
async fn grants_access_to_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require().await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.username, "alice");

    Ok(())
}

/// Tests an unauthenticated session is rejected.
///
/// Verifies that the AuthGuard fails with NotLoggedIn when the session
/// carries no user id.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn denies_access_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require().await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::NotLoggedIn) => {}
        e => panic!("Expected NotLoggedIn error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a stale session pointing at a deleted account is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_for_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Point the session at a user id that was never created
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(424242).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require().await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInDatabase(user_id)) => {
            assert_eq!(user_id, 424242);
        }
        e => panic!("Expected UserNotInDatabase error, got: {:?}", e),
    }

    Ok(())
}
