use super::*;

/// Tests updating a department's fields.
///
/// Verifies that name, code and parent change and `updated_at` moves forward.
///
/// Expected: Ok with updated department
#[tokio::test]
async fn updates_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::create_department(db).await?;
    let repo = DepartmentRepository::new(db);
    let department = repo.create(params("Recon", "REC")).await?;

    let updated = repo
        .update(
            department.id,
            DepartmentParams {
                name: "Reconnaissance".to_string(),
                code: "RCN".to_string(),
                parent_id: Some(parent.id),
                description: Some("Forward recon".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.name, "Reconnaissance");
    assert_eq!(updated.code, "RCN");
    assert_eq!(updated.parent_id, Some(parent.id));
    assert!(updated.updated_at >= department.updated_at);

    Ok(())
}

/// Tests updating a department that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);
    let result = repo.update(999, params("Ghost", "GH")).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
