use super::*;

/// Tests the next registration sequence for a kind and year.
///
/// Verifies that the highest numeric suffix is used and numbers of other kinds or years
/// are ignored.
///
/// Expected: Ok(highest + 1)
#[tokio::test]
async fn next_sequence_follows_highest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    for number in ["IN-2026-00003", "IN-2026-00011", "IN-2025-00099", "OUT-2026-00050"] {
        DocumentFactory::new(db, department.id, author.id)
            .registration_number(Some(number.to_string()))
            .build()
            .await?;
    }

    let repo = DocumentRepository::new(db);

    assert_eq!(
        repo.next_registration_sequence(DocumentKind::Incoming, 2026)
            .await?,
        12
    );
    assert_eq!(
        repo.next_registration_sequence(DocumentKind::Internal, 2026)
            .await?,
        1
    );

    Ok(())
}

/// Tests storing and checking a registration number.
///
/// Expected: Ok with the number found after assignment
#[tokio::test]
async fn sets_and_detects_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let document = factory::create_document(db, department.id, author.id).await?;

    let repo = DocumentRepository::new(db);
    assert!(!repo.registration_number_exists("IN-2026-00001").await?);

    repo.set_registration_number(document.id, "IN-2026-00001")
        .await?;

    assert!(repo.registration_number_exists("IN-2026-00001").await?);
    let document = repo.get_by_id(document.id).await?.unwrap();
    assert_eq!(document.registration_number.as_deref(), Some("IN-2026-00001"));

    Ok(())
}
