use super::*;

/// Tests request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_access_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_access_with_forged_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::user::UserFactory::new(db).build().await?;

    let headers = bearer(&TokenService::new("some-other-secret", 1), user.id);
    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token for a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn denies_access_when_user_not_in_database() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let headers = bearer(&tokens, 4242);
    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(4242)))
    ));

    Ok(())
}

/// Tests a deactivated user cannot authenticate.
///
/// Verifies that even an admin is rejected once deactivated.
///
/// Expected: Err(AuthError::UserInactive)
#[tokio::test]
async fn denies_access_to_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::user::UserFactory::new(db)
        .roles(&["ADMIN"])
        .active(false)
        .build()
        .await?;

    let headers = bearer(&tokens, user.id);
    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserInactive(id))) if id == user.id
    ));

    Ok(())
}
