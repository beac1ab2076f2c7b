use super::*;

/// Tests updating content and details of an outgoing document.
///
/// Verifies that base fields change and the detail row is replaced.
///
/// Expected: Ok with updated document
#[tokio::test]
async fn replaces_content_and_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let document = DocumentFactory::new(db, department.id, author.id)
        .kind("OUTGOING")
        .build()
        .await?;
    let deadline = Utc::now() + Duration::days(3);

    let repo = DocumentRepository::new(db);
    let updated = repo
        .update(
            document.id,
            UpdateDocumentParams {
                title: "Reply to Regional Command".to_string(),
                summary: None,
                security_level: SecurityLevel::Secret,
                deadline: Some(deadline),
                details: DocumentDetails::Outgoing {
                    recipient_organization: "Regional Command".to_string(),
                    signed_by: Some(author.id),
                    sent_at: None,
                },
            },
        )
        .await?;

    assert_eq!(updated.title, "Reply to Regional Command");
    assert_eq!(updated.security_level, SecurityLevel::Secret);
    assert_eq!(updated.deadline, Some(deadline));
    assert_eq!(
        updated.details,
        DocumentDetails::Outgoing {
            recipient_organization: "Regional Command".to_string(),
            signed_by: Some(author.id),
            sent_at: None,
        }
    );

    Ok(())
}

/// Tests changing status and marking an outgoing letter as sent.
///
/// Expected: Ok with new status and `sent_at` recorded
#[tokio::test]
async fn sets_status_and_sent_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let document = DocumentFactory::new(db, department.id, author.id)
        .kind("OUTGOING")
        .status("EXECUTED")
        .build()
        .await?;
    let now = Utc::now();

    let repo = DocumentRepository::new(db);
    repo.mark_sent(document.id, now).await?;
    let sent = repo
        .set_status(document.id, DocumentStatus::Executed, DocumentStatus::Sent)
        .await?
        .unwrap();

    assert_eq!(sent.status, DocumentStatus::Sent);
    match sent.details {
        DocumentDetails::Outgoing { sent_at, .. } => assert_eq!(sent_at, Some(now)),
        other => panic!("unexpected details {:?}", other),
    }

    Ok(())
}

/// Tests that `mark_received` keeps an existing receipt timestamp.
///
/// Expected: Ok with the first timestamp preserved
#[tokio::test]
async fn mark_received_only_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let document = factory::create_document(db, department.id, author.id).await?;
    let first = Utc::now() - Duration::hours(1);

    let repo = DocumentRepository::new(db);
    repo.mark_received(document.id, first).await?;
    repo.mark_received(document.id, Utc::now()).await?;

    let document = repo.get_by_id(document.id).await?.unwrap();
    match document.details {
        DocumentDetails::Incoming { received_at, .. } => assert_eq!(received_at, Some(first)),
        other => panic!("unexpected details {:?}", other),
    }

    Ok(())
}

/// Tests changing the status of a missing document.
///
/// Expected: Ok(None)
#[tokio::test]
async fn set_status_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db);
    let result = repo
        .set_status(3, DocumentStatus::Draft, DocumentStatus::Registered)
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests a status change whose expected current status is stale.
///
/// Verifies that the row keeps the status another writer already set.
///
/// Expected: Ok(None) and the stored status unchanged
#[tokio::test]
async fn set_status_stale() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let document = DocumentFactory::new(db, department.id, author.id)
        .status("REGISTERED")
        .build()
        .await?;

    let repo = DocumentRepository::new(db);
    let result = repo
        .set_status(document.id, DocumentStatus::Draft, DocumentStatus::Cancelled)
        .await?;
    assert!(result.is_none());

    let stored = repo.get_by_id(document.id).await?.unwrap();
    assert_eq!(stored.status, DocumentStatus::Registered);

    Ok(())
}
