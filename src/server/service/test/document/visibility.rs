use super::*;

/// Tests the scope resolved for each role.
///
/// Expected: All for registrar, commander and admin; Department for an executor;
/// AccessDenied for a user without roles or an executor without department
#[tokio::test]
async fn resolves_scope_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let all_scopes: [&[&str]; 4] = [
        &["REGISTRAR"],
        &["COMMANDER"],
        &["ADMIN"],
        &["EXECUTOR", "COMMANDER"],
    ];
    for roles in all_scopes {
        let user = member(db, department.id, roles).await?;
        assert_eq!(DocumentScope::for_user(&user)?, DocumentScope::All);
    }

    let executor = member(db, department.id, &["EXECUTOR"]).await?;
    assert_eq!(
        DocumentScope::for_user(&executor)?,
        DocumentScope::Department(department.id)
    );

    let nobody = member(db, department.id, &[]).await?;
    assert!(DocumentScope::for_user(&nobody).is_err());

    let mut homeless = executor.clone();
    homeless.department_id = None;
    assert!(DocumentScope::for_user(&homeless).is_err());

    Ok(())
}

/// Tests an executor sees owned and assigned documents only.
///
/// Expected: listing and lookup restricted to the executor's department
#[tokio::test]
async fn executor_sees_owned_and_assigned() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::create_department(db).await?;
    let other = factory::create_department(db).await?;
    let executor = member(db, unit.id, &["EXECUTOR"]).await?;
    let registrar = member(db, other.id, &["REGISTRAR"]).await?;

    let owned = factory::create_document(db, unit.id, executor.id).await?;
    let assigned = DocumentFactory::new(db, other.id, registrar.id)
        .status("DISTRIBUTED")
        .build()
        .await?;
    factory::create_assignment(db, assigned.id, unit.id, registrar.id).await?;
    let hidden = factory::create_document(db, other.id, registrar.id).await?;

    let service = DocumentService::new(db);

    let page = service
        .get_paginated(&executor, DocumentFilter::default(), 0, 10)
        .await?;
    let mut ids: Vec<i32> = page.items.iter().map(|document| document.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![owned.id, assigned.id]);
    assert_eq!(page.total, 2);

    let everything = service
        .get_paginated(&registrar, DocumentFilter::default(), 0, 10)
        .await?;
    assert_eq!(everything.total, 3);

    let found = service.get_by_id(&executor, assigned.id).await?;
    assert_eq!(found.assignments.len(), 1);

    let result = service.get_by_id(&executor, hidden.id).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests looking up a document that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_document_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let registrar = member(db, department.id, &["REGISTRAR"]).await?;

    let result = DocumentService::new(db).get_by_id(&registrar, 4711).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
