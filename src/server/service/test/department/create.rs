use super::*;

/// Tests creating a department under an existing parent.
///
/// Expected: Ok with the parent recorded
#[tokio::test]
async fn creates_with_parent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let battalion = factory::create_department(db).await?;

    let company = DepartmentService::new(db)
        .create(params("1st Company", "1CO", Some(battalion.id)))
        .await?;

    assert_eq!(company.parent_id, Some(battalion.id));
    assert_eq!(company.code, "1CO");

    Ok(())
}

/// Tests blank fields and unknown parents are rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_params() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DepartmentService::new(db);

    assert!(matches!(
        service.create(params("", "HQ", None)).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(params("Staff", "   ", None)).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(params("Staff", "HQ", Some(9999))).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests a department cannot become its own parent.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_self_parent_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let result = DepartmentService::new(db)
        .update(
            department.id,
            params(&department.name, &department.code, Some(department.id)),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
