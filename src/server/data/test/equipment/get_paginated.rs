use super::*;

/// Tests filtering inventory by category, condition and department.
///
/// Expected: Ok with matching items ordered by inventory number
#[tokio::test]
async fn applies_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let other = factory::create_department(db).await?;
    EquipmentFactory::new(db, department.id)
        .inventory_number("WPN-0002")
        .category("WEAPON")
        .build()
        .await?;
    EquipmentFactory::new(db, department.id)
        .inventory_number("WPN-0001")
        .category("WEAPON")
        .condition("WRITTEN_OFF")
        .build()
        .await?;
    EquipmentFactory::new(db, department.id)
        .inventory_number("VEH-0001")
        .category("VEHICLE")
        .build()
        .await?;
    EquipmentFactory::new(db, other.id)
        .inventory_number("WPN-0003")
        .category("WEAPON")
        .build()
        .await?;

    let repo = EquipmentRepository::new(db);

    let (weapons, total) = repo
        .get_paginated(
            &EquipmentFilter {
                category: Some(EquipmentCategory::Weapon),
                department_id: Some(department.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 2);
    let numbers: Vec<&str> = weapons.iter().map(|e| e.inventory_number.as_str()).collect();
    assert_eq!(numbers, vec!["WPN-0001", "WPN-0002"]);

    let (written_off, _) = repo
        .get_paginated(
            &EquipmentFilter {
                condition: Some(EquipmentCondition::WrittenOff),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(written_off.len(), 1);
    assert!(written_off[0].is_written_off());

    Ok(())
}
