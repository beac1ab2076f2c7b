use super::*;

/// Tests paging users filtered by department.
///
/// Verifies that only members of the requested department are returned, ordered by full
/// name, and that the total counts only that department.
///
/// Expected: Ok with filtered users
#[tokio::test]
async fn filters_by_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_department(db).await?;
    let second = factory::create_department(db).await?;
    factory::user::UserFactory::new(db)
        .full_name("Zaitsev")
        .department_id(first.id)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .full_name("Alekseev")
        .department_id(first.id)
        .roles(&["EXECUTOR"])
        .build()
        .await?;
    factory::create_user(db, second.id).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_paginated(Some(first.id), 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(users[0].full_name, "Alekseev");
    assert_eq!(users[0].roles, vec![RoleKind::Executor]);
    assert_eq!(users[1].full_name, "Zaitsev");
    assert!(users[1].roles.is_empty());

    Ok(())
}

/// Tests paging all users without a department filter.
///
/// Expected: Ok with every user counted
#[tokio::test]
async fn returns_all_without_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    for _ in 0..3 {
        factory::create_user(db, department.id).await?;
    }
    factory::user::UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_paginated(None, 0, 3).await?;

    assert_eq!(total, 4);
    assert_eq!(users.len(), 3);

    Ok(())
}
