use super::*;

mod require_admin;
mod token;

/// Tests multiple permissions are all checked.
///
/// Verifies that a user holding only one of two required roles is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let department = factory::create_department(db).await?;
    let user = factory::create_user_with_roles(db, department.id, &["REGISTRAR"]).await?;

    let headers = bearer(&tokens, user.id);
    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Registrar, Permission::Commander])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    let both = factory::create_user_with_roles(db, department.id, &["REGISTRAR", "COMMANDER"]).await?;
    let headers = bearer(&tokens, both.id);
    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Registrar, Permission::Commander])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests admin passes every permission at once.
///
/// Expected: Ok(User)
#[tokio::test]
async fn admin_passes_multiple_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let department = factory::create_department(db).await?;
    let admin = factory::create_user_with_roles(db, department.id, &["ADMIN"]).await?;

    let headers = bearer(&tokens, admin.id);
    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[
            Permission::Registrar,
            Permission::Commander,
            Permission::Executor,
        ])
        .await?;

    assert_eq!(user.id, admin.id);
    assert!(user.is_admin());

    Ok(())
}

/// Tests empty permission list only requires authentication.
///
/// Verifies that a user without any roles passes when no permission is required.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let department = factory::create_department(db).await?;
    let user = factory::create_user(db, department.id).await?;

    let headers = bearer(&tokens, user.id);
    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);
    assert!(result.roles.is_empty());

    Ok(())
}
