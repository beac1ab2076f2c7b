use super::*;

/// Tests fan-out stores one row per distinct recipient and publishes each.
///
/// Expected: Ok with two notifications, both received by a live subscriber
#[tokio::test]
async fn persists_and_publishes_per_recipient() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();
    let mut live = hub.subscribe();

    let department = factory::create_department(db).await?;
    let first = factory::create_user(db, department.id).await?;
    let second = factory::create_user(db, department.id).await?;

    let created = NotificationService::new(db, &hub)
        .notify(
            &[second.id, first.id, second.id],
            NewNotification::new(NotificationKind::Schedule, "Drill", "Drill at 06:00"),
        )
        .await?;

    assert_eq!(created.len(), 2);
    assert!(created.iter().all(|n| !n.read && n.document_id.is_none()));

    let mut delivered = vec![live.try_recv().unwrap().user_id, live.try_recv().unwrap().user_id];
    delivered.sort_unstable();
    let mut expected = vec![first.id, second.id];
    expected.sort_unstable();
    assert_eq!(delivered, expected);

    Ok(())
}

/// Tests notifying nobody.
///
/// Expected: Ok with no notifications
#[tokio::test]
async fn empty_recipients_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let created = NotificationService::new(db, &hub)
        .notify(
            &[],
            NewNotification::new(NotificationKind::Schedule, "Drill", "Drill at 06:00"),
        )
        .await?;

    assert!(created.is_empty());

    Ok(())
}
