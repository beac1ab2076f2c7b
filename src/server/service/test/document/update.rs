use super::*;

fn params(title: &str, details: DocumentDetails) -> UpdateDocumentParams {
    UpdateDocumentParams {
        title: title.to_string(),
        summary: Some("Amended".to_string()),
        security_level: SecurityLevel::Restricted,
        deadline: None,
        details,
    }
}

fn incoming_details() -> DocumentDetails {
    DocumentDetails::Incoming {
        sender_organization: "Brigade HQ".to_string(),
        sender_reference: None,
        received_at: None,
    }
}

/// Tests editing a registered document.
///
/// Expected: Ok with new content and an UPDATED history row keeping the status
#[tokio::test]
async fn updates_editable_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let registrar = member(db, department.id, &["REGISTRAR"]).await?;
    let document = DocumentFactory::new(db, department.id, registrar.id)
        .status("REGISTERED")
        .build()
        .await?;

    let service = DocumentService::new(db);
    let updated = service
        .update(&registrar, document.id, params("Corrected", incoming_details()))
        .await?;

    assert_eq!(updated.title, "Corrected");
    assert_eq!(updated.security_level, SecurityLevel::Restricted);
    assert_eq!(updated.status, DocumentStatus::Registered);

    let history = service.history(&registrar, document.id).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action, HistoryAction::Updated);
    assert_eq!(history[0].to_status, DocumentStatus::Registered);

    Ok(())
}

/// Tests editing is refused once work on a document has started.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_document_in_progress() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let registrar = member(db, department.id, &["REGISTRAR"]).await?;
    let document = DocumentFactory::new(db, department.id, registrar.id)
        .status("IN_PROGRESS")
        .build()
        .await?;

    let result = DocumentService::new(db)
        .update(&registrar, document.id, params("Too late", incoming_details()))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests details of another kind than the document.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_kind_mismatch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let registrar = member(db, department.id, &["REGISTRAR"]).await?;
    let document = factory::create_document(db, department.id, registrar.id).await?;

    let details = DocumentDetails::Outgoing {
        recipient_organization: "Ministry".to_string(),
        signed_by: None,
        sent_at: None,
    };
    let result = DocumentService::new(db)
        .update(&registrar, document.id, params("Letter", details))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests only drafts can be deleted.
///
/// Expected: Err(AppError::Conflict) for a registered document, Ok for a draft
#[tokio::test]
async fn deletes_only_drafts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let registrar = member(db, department.id, &["REGISTRAR"]).await?;
    let registered = DocumentFactory::new(db, department.id, registrar.id)
        .status("REGISTERED")
        .build()
        .await?;
    let draft = factory::create_document(db, department.id, registrar.id).await?;

    let service = DocumentService::new(db);

    let result = service.delete(&registrar, registered.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    service.delete(&registrar, draft.id).await?;
    let result = service.get_by_id(&registrar, draft.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
