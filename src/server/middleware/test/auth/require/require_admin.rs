use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with the ADMIN role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::user::UserFactory::new(db)
        .username("chief")
        .roles(&["ADMIN"])
        .build()
        .await?;

    let headers = bearer(&tokens, admin.id);
    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.username, "chief");
    assert!(user.is_admin());

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Verifies that a commander does not satisfy the admin permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the missing role
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let department = factory::create_department(db).await?;
    let commander = factory::create_user_with_roles(db, department.id, &["COMMANDER"]).await?;

    let headers = bearer(&tokens, commander.id);
    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, commander.id);
            assert!(message.contains("ADMIN"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
