use super::*;

/// Tests deleting an unreferenced department.
///
/// Expected: Ok, then Err(AppError::NotFound) on lookup
#[tokio::test]
async fn deletes_unreferenced_department() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let service = DepartmentService::new(db);
    service.delete(department.id).await?;

    let result = service.get_by_id(department.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a department with members cannot be deleted.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_referenced_department() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    factory::create_user(db, department.id).await?;

    let result = DepartmentService::new(db).delete(department.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting a department that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_department() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DepartmentService::new(db).delete(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
