use super::*;

/// Tests registering an inventory item.
///
/// Expected: Ok with category and condition stored
#[tokio::test]
async fn creates_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let repo = EquipmentRepository::new(db);
    let item = repo
        .create(EquipmentParams {
            inventory_number: "GEN-0001".to_string(),
            name: "Diesel generator".to_string(),
            category: EquipmentCategory::PowerStation,
            model: Some("AD-30".to_string()),
            serial_number: None,
            quantity: 1,
            condition: EquipmentCondition::Serviceable,
            department_id: department.id,
            notes: None,
        })
        .await?;

    assert_eq!(item.category, EquipmentCategory::PowerStation);
    assert_eq!(item.condition, EquipmentCondition::Serviceable);
    assert!(!item.is_written_off());
    assert_eq!(repo.get_by_id(item.id).await?, Some(item));

    Ok(())
}

/// Tests that inventory numbers are unique.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_inventory_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    EquipmentFactory::new(db, department.id)
        .inventory_number("VEH-0100")
        .build()
        .await?;

    let repo = EquipmentRepository::new(db);
    let result = repo
        .create(EquipmentParams {
            inventory_number: "VEH-0100".to_string(),
            name: "Truck".to_string(),
            category: EquipmentCategory::Vehicle,
            model: None,
            serial_number: None,
            quantity: 1,
            condition: EquipmentCondition::NeedsRepair,
            department_id: department.id,
            notes: None,
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
