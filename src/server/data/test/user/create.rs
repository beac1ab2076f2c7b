use super::*;

/// Tests creating a user with roles.
///
/// Verifies that the user row and role links are stored and that the returned user
/// carries its roles in name order.
///
/// Expected: Ok with user and sorted roles
#[tokio::test]
async fn creates_user_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "ivanov".to_string(),
            full_name: "Ivanov I. I.".to_string(),
            rank: Some("Captain".to_string()),
            position: None,
            department_id: Some(department.id),
            roles: vec![RoleKind::Registrar, RoleKind::Commander],
        })
        .await?;

    assert_eq!(user.username, "ivanov");
    assert!(user.active);
    assert_eq!(user.department_id, Some(department.id));
    assert_eq!(user.roles, vec![RoleKind::Commander, RoleKind::Registrar]);

    let fetched = repo.find_by_username("ivanov").await?.unwrap();
    assert_eq!(fetched, user);

    Ok(())
}

/// Tests creating a user with a taken username.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("petrov")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "petrov".to_string(),
            full_name: "Petrov P. P.".to_string(),
            rank: None,
            position: None,
            department_id: None,
            roles: Vec::new(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
