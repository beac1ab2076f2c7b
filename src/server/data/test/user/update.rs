use super::*;

/// Tests updating a user's profile and activity flag.
///
/// Verifies that profile fields change, roles are preserved, and deactivation sticks.
///
/// Expected: Ok with updated user
#[tokio::test]
async fn updates_profile_and_active() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let user = factory::create_user_with_roles(db, department.id, &["EXECUTOR"]).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                full_name: "Sidorov S. S.".to_string(),
                rank: Some("Major".to_string()),
                position: Some("Chief of staff".to_string()),
                department_id: None,
            },
        )
        .await?;

    assert_eq!(updated.full_name, "Sidorov S. S.");
    assert_eq!(updated.rank.as_deref(), Some("Major"));
    assert!(updated.department_id.is_none());
    assert_eq!(updated.roles, vec![RoleKind::Executor]);

    let deactivated = repo.set_active(user.id, false).await?;
    assert!(!deactivated.active);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_active(42, false).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
