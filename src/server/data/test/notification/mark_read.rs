use super::*;

/// Tests marking a single notification as read.
///
/// Expected: Ok(Some) with read flag set
#[tokio::test]
async fn marks_own_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user) = factory::helpers::create_department_with_member(db, &[]).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let marked = repo.mark_read(notification.id, user.id).await?.unwrap();

    assert!(marked.read);
    assert_eq!(repo.count_unread(user.id).await?, 0);

    Ok(())
}

/// Tests that a user cannot mark another user's notification.
///
/// Expected: Ok(None) and the notification stays unread
#[tokio::test]
async fn ignores_foreign_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, owner) = factory::helpers::create_department_with_member(db, &[]).await?;
    let intruder = factory::create_user(db, department.id).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);
    assert!(repo.mark_read(notification.id, intruder.id).await?.is_none());
    assert_eq!(repo.count_unread(owner.id).await?, 1);

    Ok(())
}

/// Tests marking all of a user's notifications as read.
///
/// Expected: Ok with the number of previously unread notifications
#[tokio::test]
async fn marks_all_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, user) = factory::helpers::create_department_with_member(db, &[]).await?;
    let other = factory::create_user(db, department.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    NotificationFactory::new(db, user.id).read(true).build().await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    assert_eq!(repo.mark_all_read(user.id).await?, 2);
    assert_eq!(repo.count_unread(user.id).await?, 0);
    assert_eq!(repo.count_unread(other.id).await?, 1);

    Ok(())
}
