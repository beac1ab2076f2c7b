use super::*;

/// Tests replacing a user's roles.
///
/// Verifies that previous roles are removed and duplicates in the input collapse.
///
/// Expected: Ok with exactly the new roles
#[tokio::test]
async fn replaces_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let user = factory::create_user_with_roles(db, department.id, &["ADMIN", "EXECUTOR"]).await?;

    let repo = UserRepository::new(db);
    repo.set_roles(user.id, &[RoleKind::Registrar, RoleKind::Registrar])
        .await?;

    let user = repo.get_by_id(user.id).await?.unwrap();
    assert_eq!(user.roles, vec![RoleKind::Registrar]);

    Ok(())
}

/// Tests clearing all roles.
///
/// Expected: Ok with no roles
#[tokio::test]
async fn clears_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let user = factory::create_user_with_roles(db, department.id, &["COMMANDER"]).await?;

    let repo = UserRepository::new(db);
    repo.set_roles(user.id, &[]).await?;

    let user = repo.get_by_id(user.id).await?.unwrap();
    assert!(user.roles.is_empty());

    Ok(())
}
