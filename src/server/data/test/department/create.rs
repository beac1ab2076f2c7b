use super::*;

/// Tests creating a top-level department.
///
/// Verifies that the repository stores name and code and sets both timestamps.
///
/// Expected: Ok with department created
#[tokio::test]
async fn creates_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);
    let department = repo.create(params("Headquarters", "HQ")).await?;

    assert_eq!(department.name, "Headquarters");
    assert_eq!(department.code, "HQ");
    assert!(department.parent_id.is_none());
    assert_eq!(department.created_at, department.updated_at);

    Ok(())
}

/// Tests creating a department with a duplicate code.
///
/// Verifies that the unique constraint on code is enforced by the schema.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);
    repo.create(params("Logistics", "LOG")).await?;
    let result = repo.create(params("Logistics Two", "LOG")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
