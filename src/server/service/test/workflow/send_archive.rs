use super::*;

/// Tests sending an executed outgoing letter.
///
/// Expected: Ok with status SENT, send time recorded and a SENT history row
#[tokio::test]
async fn sends_outgoing_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let department = factory::create_department(db).await?;
    let registrar = member(db, department.id, &["REGISTRAR"]).await?;
    let document = DocumentFactory::new(db, department.id, registrar.id)
        .kind("OUTGOING")
        .status("EXECUTED")
        .build()
        .await?;

    let sent = WorkflowService::new(db, &hub)
        .send(&registrar, document.id, None)
        .await?;

    assert_eq!(sent.status, DocumentStatus::Sent);
    assert!(matches!(
        sent.details,
        DocumentDetails::Outgoing {
            sent_at: Some(_),
            ..
        }
    ));

    let history = DocumentHistoryRepository::new(db)
        .get_by_document(document.id)
        .await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action, HistoryAction::Sent);

    Ok(())
}

/// Tests sending a document that is not outgoing correspondence.
///
/// Expected: Err(AppError::InvalidTransition)
#[tokio::test]
async fn rejects_sending_incoming_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let department = factory::create_department(db).await?;
    let registrar = member(db, department.id, &["REGISTRAR"]).await?;
    let document = DocumentFactory::new(db, department.id, registrar.id)
        .status("EXECUTED")
        .build()
        .await?;

    let result = WorkflowService::new(db, &hub)
        .send(&registrar, document.id, None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::InvalidTransition {
            from: DocumentStatus::Executed,
            to: DocumentStatus::Sent,
        })
    ));

    Ok(())
}

/// Tests archiving a sent document and refusing to archive a draft.
///
/// Expected: Ok for SENT, Err(AppError::InvalidTransition) for DRAFT
#[tokio::test]
async fn archives_finished_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let department = factory::create_department(db).await?;
    let commander = member(db, department.id, &["COMMANDER"]).await?;
    let sent = DocumentFactory::new(db, department.id, commander.id)
        .kind("OUTGOING")
        .status("SENT")
        .build()
        .await?;
    let draft = factory::create_document(db, department.id, commander.id).await?;

    let workflow = WorkflowService::new(db, &hub);

    let archived = workflow
        .archive(&commander, sent.id, Some("Closed".to_string()))
        .await?;
    assert_eq!(archived.status, DocumentStatus::Archived);

    let history = DocumentHistoryRepository::new(db)
        .get_by_document(sent.id)
        .await?;
    assert_eq!(history[0].action, HistoryAction::Archived);
    assert_eq!(history[0].comment.as_deref(), Some("Closed"));

    let result = workflow.archive(&commander, draft.id, None).await;
    assert!(matches!(result, Err(AppError::InvalidTransition { .. })));

    Ok(())
}
