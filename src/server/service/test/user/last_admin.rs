use super::*;

/// Tests the last active admin keeps the ADMIN role.
///
/// Expected: Err(AppError::Conflict) while alone, Ok once a second admin exists
#[tokio::test]
async fn keeps_last_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let admin = factory::create_user_with_roles(db, department.id, &["ADMIN"]).await?;

    let service = UserService::new(db);

    let result = service.set_roles(admin.id, vec![RoleKind::Commander]).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    factory::create_user_with_roles(db, department.id, &["ADMIN"]).await?;
    let demoted = service
        .set_roles(admin.id, vec![RoleKind::Commander])
        .await?;
    assert_eq!(demoted.roles, vec![RoleKind::Commander]);

    Ok(())
}

/// Tests the last active admin cannot be deactivated.
///
/// Verifies that an inactive admin does not count towards the remaining admins.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn keeps_last_admin_active() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .roles(&["ADMIN"])
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .roles(&["ADMIN"])
        .active(false)
        .build()
        .await?;

    let service = UserService::new(db);

    let result = service.set_active(admin.id, false).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let user = service.get_by_id(admin.id).await?;
    assert!(user.active);

    Ok(())
}

/// Tests deactivating a regular user and an unknown user.
///
/// Expected: Ok for the user, Err(AppError::NotFound) for the unknown ID
#[tokio::test]
async fn deactivates_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let executor = factory::create_user_with_roles(db, department.id, &["EXECUTOR"]).await?;

    let service = UserService::new(db);

    let user = service.set_active(executor.id, false).await?;
    assert!(!user.active);

    let result = service.set_active(9999, false).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deactivating the only two admins at the same time.
///
/// Verifies that the remaining-admin count and the update are checked together, so one
/// of the two requests sees the other's result.
///
/// Expected: one Ok, one Err(AppError::Conflict), one active admin left
#[tokio::test]
async fn keeps_one_admin_under_concurrent_deactivation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let first = factory::create_user_with_roles(db, department.id, &["ADMIN"]).await?;
    let second = factory::create_user_with_roles(db, department.id, &["ADMIN"]).await?;

    let service = UserService::new(db);
    let (a, b) = tokio::join!(
        service.set_active(first.id, false),
        service.set_active(second.id, false),
    );

    assert!(a.is_ok() != b.is_ok());
    assert!(matches!(a.err().or(b.err()), Some(AppError::Conflict(_))));
    assert_eq!(UserRepository::new(db).count_active_admins().await?, 1);

    Ok(())
}

/// Tests demoting the only two admins at the same time.
///
/// Expected: one Ok, one Err(AppError::Conflict), one active admin left
#[tokio::test]
async fn keeps_one_admin_under_concurrent_demotion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let first = factory::create_user_with_roles(db, department.id, &["ADMIN"]).await?;
    let second = factory::create_user_with_roles(db, department.id, &["ADMIN"]).await?;

    let service = UserService::new(db);
    let (a, b) = tokio::join!(
        service.set_roles(first.id, vec![RoleKind::Commander]),
        service.set_roles(second.id, vec![RoleKind::Commander]),
    );

    assert!(a.is_ok() != b.is_ok());
    assert!(matches!(a.err().or(b.err()), Some(AppError::Conflict(_))));
    assert_eq!(UserRepository::new(db).count_active_admins().await?, 1);

    Ok(())
}
