use super::*;

/// Tests that listing returns newest documents first with a full total.
///
/// Expected: Ok with documents ordered by creation time descending
#[tokio::test]
async fn newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let now = Utc::now();
    let old = DocumentFactory::new(db, department.id, author.id)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let recent = DocumentFactory::new(db, department.id, author.id)
        .created_at(now)
        .build()
        .await?;
    let middle = DocumentFactory::new(db, department.id, author.id)
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = DocumentRepository::new(db);
    let (documents, total) = repo
        .get_paginated(&DocumentFilter::default(), 0, 10)
        .await?;

    assert_eq!(total, 3);
    let ids: Vec<i32> = documents.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![recent.id, middle.id, old.id]);

    Ok(())
}

/// Tests kind, status and search filters.
///
/// Verifies that search matches either title or registration number.
///
/// Expected: Ok with only matching documents
#[tokio::test]
async fn applies_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let report = DocumentFactory::new(db, department.id, author.id)
        .kind("OUTGOING")
        .status("REGISTERED")
        .title("Readiness report")
        .registration_number(Some("OUT-2026-00001".to_string()))
        .build()
        .await?;
    DocumentFactory::new(db, department.id, author.id)
        .title("Readiness order")
        .build()
        .await?;
    let numbered = DocumentFactory::new(db, department.id, author.id)
        .status("REGISTERED")
        .title("Supply request")
        .registration_number(Some("IN-2026-00007".to_string()))
        .build()
        .await?;

    let repo = DocumentRepository::new(db);

    let (outgoing, _) = repo
        .get_paginated(
            &DocumentFilter {
                kind: Some(DocumentKind::Outgoing),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0].id, report.id);

    let (registered, total) = repo
        .get_paginated(
            &DocumentFilter {
                status: Some(DocumentStatus::Registered),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 2);
    assert_eq!(registered.len(), 2);

    let (by_title, _) = repo
        .get_paginated(
            &DocumentFilter {
                search: Some("readiness".to_string()),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(by_title.len(), 2);

    let (by_number, _) = repo
        .get_paginated(
            &DocumentFilter {
                search: Some(" 00007 ".to_string()),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(by_number.len(), 1);
    assert_eq!(by_number[0].id, numbered.id);

    Ok(())
}

/// Tests restricting the listing to documents visible to a department.
///
/// Verifies that owned and assigned documents are included and foreign ones are not.
///
/// Expected: Ok with owned and assigned documents only
#[tokio::test]
async fn visible_to_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (ours, member) = factory::helpers::create_department_with_member(db, &[]).await?;
    let (theirs, outsider) = factory::helpers::create_department_with_member(db, &[]).await?;
    let owned = factory::create_document(db, ours.id, member.id).await?;
    let assigned = factory::create_document(db, theirs.id, outsider.id).await?;
    factory::create_assignment(db, assigned.id, ours.id, outsider.id).await?;
    let foreign = factory::create_document(db, theirs.id, outsider.id).await?;

    let repo = DocumentRepository::new(db);
    let (documents, total) = repo
        .get_paginated(
            &DocumentFilter {
                visible_to_department: Some(ours.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = documents.iter().map(|d| d.id).collect();
    assert!(ids.contains(&owned.id));
    assert!(ids.contains(&assigned.id));
    assert!(!ids.contains(&foreign.id));

    assert!(repo.is_visible_to_department(assigned.id, ours.id).await?);
    assert!(!repo.is_visible_to_department(foreign.id, ours.id).await?);

    Ok(())
}
