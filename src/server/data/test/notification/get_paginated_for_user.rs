use super::*;

/// Tests listing a user's notifications with and without the unread filter.
///
/// Verifies that other users' notifications never appear.
///
/// Expected: Ok with own notifications only
#[tokio::test]
async fn lists_own_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, user) = factory::helpers::create_department_with_member(db, &[]).await?;
    let other = factory::create_user(db, department.id).await?;
    factory::create_notification(db, user.id).await?;
    NotificationFactory::new(db, user.id).read(true).build().await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);

    let (all, total) = repo.get_paginated_for_user(user.id, false, 0, 10).await?;
    assert_eq!(total, 2);
    assert!(all.iter().all(|n| n.user_id == user.id));

    let (unread, unread_total) = repo.get_paginated_for_user(user.id, true, 0, 10).await?;
    assert_eq!(unread_total, 1);
    assert!(!unread[0].read);

    assert_eq!(repo.count_unread(user.id).await?, 1);

    Ok(())
}
