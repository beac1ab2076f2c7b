use super::*;

/// Tests owned and assigned documents are merged newest first.
///
/// Verifies that a document both owned and assigned is listed once and that the total
/// accounts for it.
///
/// Expected: Ok with the merged order across pages
#[tokio::test]
async fn merges_owned_and_assigned() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::create_department(db).await?;
    let other = factory::create_department(db).await?;
    let registrar = member(db, other.id, &["REGISTRAR"]).await?;
    let now = Utc::now();

    let owned_old = DocumentFactory::new(db, unit.id, registrar.id)
        .created_at(now - Duration::hours(4))
        .build()
        .await?;
    let assigned_mid = DocumentFactory::new(db, other.id, registrar.id)
        .status("DISTRIBUTED")
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    let owned_and_assigned = DocumentFactory::new(db, unit.id, registrar.id)
        .status("DISTRIBUTED")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let assigned_new = DocumentFactory::new(db, other.id, registrar.id)
        .status("DISTRIBUTED")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    for document in [&assigned_mid, &owned_and_assigned, &assigned_new] {
        factory::create_assignment(db, document.id, unit.id, registrar.id).await?;
    }
    factory::create_document(db, other.id, registrar.id).await?;

    let service = DocumentService::new(db);

    let first = service
        .list_for_department(&registrar, unit.id, 0, 2)
        .await?;
    let ids: Vec<i32> = first.items.iter().map(|document| document.id).collect();
    assert_eq!(ids, vec![assigned_new.id, owned_and_assigned.id]);
    assert_eq!(first.total, 4);
    assert_eq!(first.total_pages, 2);

    let second = service
        .list_for_department(&registrar, unit.id, 1, 2)
        .await?;
    let ids: Vec<i32> = second.items.iter().map(|document| document.id).collect();
    assert_eq!(ids, vec![assigned_mid.id, owned_old.id]);

    Ok(())
}

/// Tests an executor listing another department and an unknown department.
///
/// Expected: Err(AuthError::AccessDenied) and Err(AppError::NotFound)
#[tokio::test]
async fn rejects_foreign_and_unknown_department() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::create_department(db).await?;
    let other = factory::create_department(db).await?;
    let executor = member(db, unit.id, &["EXECUTOR"]).await?;
    let commander = member(db, unit.id, &["COMMANDER"]).await?;

    let service = DocumentService::new(db);

    let foreign = service.list_for_department(&executor, other.id, 0, 10).await;
    assert!(matches!(
        foreign,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let unknown = service.list_for_department(&commander, 9999, 0, 10).await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    let own = service.list_for_department(&executor, unit.id, 0, 10).await?;
    assert!(own.items.is_empty());
    assert_eq!(own.total, 0);

    Ok(())
}

/// Tests pages past the addressable range for both listing paths.
///
/// Verifies that the filtered listing and the merged listing refuse pages whose offset
/// overflows, and that the merged listing also refuses pages beyond its row cap.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_out_of_range_pages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::create_department(db).await?;
    let admin = member(db, unit.id, &["ADMIN"]).await?;

    let service = DocumentService::new(db);

    assert!(matches!(
        service
            .get_paginated(&admin, DocumentFilter::default(), u64::MAX / 50, 100)
            .await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service
            .list_for_department(&admin, unit.id, u64::MAX / 50, 100)
            .await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service
            .list_for_department(&admin, unit.id, 1_000_000, 100)
            .await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
