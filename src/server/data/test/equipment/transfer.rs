use super::*;

/// Tests transferring an item to another department.
///
/// Expected: Ok with the new owning department
#[tokio::test]
async fn moves_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::create_department(db).await?;
    let to = factory::create_department(db).await?;
    let item = factory::create_equipment(db, from.id).await?;

    let repo = EquipmentRepository::new(db);
    let moved = repo.transfer(item.id, to.id).await?;

    assert_eq!(moved.department_id, to.id);

    Ok(())
}

/// Tests transferring to a department that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let item = factory::create_equipment(db, department.id).await?;

    let repo = EquipmentRepository::new(db);
    let result = repo.transfer(item.id, 9999).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests transferring an item that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn rejects_unknown_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let repo = EquipmentRepository::new(db);
    let result = repo.transfer(404, department.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
