use super::*;

/// Tests writing and reading history entries in order.
///
/// Expected: Ok with entries oldest first and statuses preserved
#[tokio::test]
async fn records_entries_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let document = factory::create_document(db, department.id, author.id).await?;

    let repo = DocumentHistoryRepository::new(db);
    repo.create(
        document.id,
        NewHistoryEntry {
            action: HistoryAction::Created,
            from_status: None,
            to_status: DocumentStatus::Draft,
            user_id: author.id,
            department_id: Some(department.id),
            comment: None,
        },
    )
    .await?;
    repo.create(
        document.id,
        NewHistoryEntry {
            action: HistoryAction::Registered,
            from_status: Some(DocumentStatus::Draft),
            to_status: DocumentStatus::Registered,
            user_id: author.id,
            department_id: Some(department.id),
            comment: Some("IN-2026-00001".to_string()),
        },
    )
    .await?;

    let history = repo.get_by_document(document.id).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].action, HistoryAction::Created);
    assert!(history[0].from_status.is_none());
    assert_eq!(history[1].action, HistoryAction::Registered);
    assert_eq!(history[1].from_status, Some(DocumentStatus::Draft));
    assert_eq!(history[1].to_status, DocumentStatus::Registered);

    Ok(())
}
