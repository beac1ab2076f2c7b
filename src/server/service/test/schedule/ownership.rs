use super::*;

/// Tests only the creator or an admin may change an entry.
///
/// Expected: Err(AuthError::AccessDenied) for another user, Ok for the admin
#[tokio::test]
async fn restricts_changes_to_owner_or_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let owner = factory::user::UserFactory::new(db).build().await?;
    let stranger = factory::user::UserFactory::new(db).build().await?;
    let admin = factory::user::UserFactory::new(db)
        .roles(&["ADMIN"])
        .build()
        .await?;
    let schedule = factory::create_schedule(db, owner.id).await?;

    let stranger = load_user(db, stranger.id).await?;
    let admin = load_user(db, admin.id).await?;
    let service = ScheduleService::new(db, &hub);

    let result = service.update(&stranger, schedule.id, params(None)).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let result = service.delete(&stranger, schedule.id).await;
    assert!(result.is_err());

    let updated = service.update(&admin, schedule.id, params(None)).await?;
    assert_eq!(updated.title, "Morning formation");
    assert_eq!(updated.created_by, owner.id);

    service.delete(&admin, schedule.id).await?;
    assert!(matches!(
        service.get_by_id(schedule.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
