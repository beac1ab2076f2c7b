use super::*;

fn params(username: &str, department_id: Option<i32>) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        full_name: "Petro Shevchenko".to_string(),
        rank: Some("Sergeant".to_string()),
        position: None,
        department_id,
        roles: vec![RoleKind::Executor],
    }
}

/// Tests creating a user with roles in an existing department.
///
/// Expected: Ok with the requested role
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let user = UserService::new(db)
        .create(params("shevchenko", Some(department.id)))
        .await?;

    assert_eq!(user.roles, vec![RoleKind::Executor]);
    assert_eq!(user.department_id, Some(department.id));
    assert!(user.active);

    Ok(())
}

/// Tests blank usernames and unknown departments are rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_params() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    assert!(matches!(
        service.create(params("", None)).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(params("   ", None)).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(params("orphan", Some(9999))).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests a taken username surfaces as a unique constraint violation.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service.create(params("duty", None)).await?;

    let result = service.create(params("duty", None)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests a failed role link leaves no half-created user behind.
///
/// The role table is created without the seeded roles, so linking EXECUTOR fails after
/// the user row was inserted.
///
/// Expected: Err and no user stored under the username
#[tokio::test]
async fn rolls_back_user_without_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Department)
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Role)
        .with_table(entity::prelude::UserRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).create(params("ghost", None)).await;
    assert!(result.is_err());

    let stored = UserRepository::new(db).find_by_username("ghost").await?;
    assert!(stored.is_none());

    Ok(())
}
