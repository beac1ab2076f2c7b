use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test inventory items.
///
/// Defaults to a single serviceable weapon with a unique inventory number.
pub struct EquipmentFactory<'a> {
    db: &'a DatabaseConnection,
    department_id: i32,
    inventory_number: String,
    category: String,
    condition: String,
    quantity: i32,
}

impl<'a> EquipmentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, department_id: i32) -> Self {
        Self {
            db,
            department_id,
            inventory_number: format!("INV-{:06}", next_id()),
            category: "WEAPON".to_string(),
            condition: "SERVICEABLE".to_string(),
            quantity: 1,
        }
    }

    pub fn inventory_number(mut self, number: impl Into<String>) -> Self {
        self.inventory_number = number.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub async fn build(self) -> Result<entity::equipment::Model, DbErr> {
        let now = Utc::now();

        entity::equipment::ActiveModel {
            id: ActiveValue::NotSet,
            inventory_number: ActiveValue::Set(self.inventory_number),
            name: ActiveValue::Set("Rifle".to_string()),
            category: ActiveValue::Set(self.category),
            model: ActiveValue::Set(None),
            serial_number: ActiveValue::Set(None),
            quantity: ActiveValue::Set(self.quantity),
            condition: ActiveValue::Set(self.condition),
            department_id: ActiveValue::Set(self.department_id),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a serviceable weapon held by `department_id`.
pub async fn create_equipment(
    db: &DatabaseConnection,
    department_id: i32,
) -> Result<entity::equipment::Model, DbErr> {
    EquipmentFactory::new(db, department_id).build().await
}
