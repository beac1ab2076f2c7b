//! Equipment inventory domain models.
//!
//! Weapons, vehicles, ammunition lots and power stations share one record type and are
//! told apart by [`EquipmentCategory`].

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::equipment::{EquipmentCategory, EquipmentCondition, EquipmentDto, UpsertEquipmentDto},
    server::util::parse::parse_stored,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    pub id: i32,
    /// Unique inventory number.
    pub inventory_number: String,
    pub name: String,
    pub category: EquipmentCategory,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    /// Number of units, e.g. rounds in an ammunition lot. Never negative.
    pub quantity: i32,
    pub condition: EquipmentCondition,
    /// Department holding the item.
    pub department_id: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Equipment {
    pub fn from_entity(entity: entity::equipment::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            inventory_number: entity.inventory_number,
            name: entity.name,
            category: parse_stored(
                "equipment.category",
                &entity.category,
                EquipmentCategory::parse,
            )?,
            model: entity.model,
            serial_number: entity.serial_number,
            quantity: entity.quantity,
            condition: parse_stored(
                "equipment.condition",
                &entity.condition,
                EquipmentCondition::parse,
            )?,
            department_id: entity.department_id,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn is_written_off(&self) -> bool {
        self.condition == EquipmentCondition::WrittenOff
    }

    pub fn into_dto(self) -> EquipmentDto {
        EquipmentDto {
            id: self.id,
            inventory_number: self.inventory_number,
            name: self.name,
            category: self.category,
            model: self.model,
            serial_number: self.serial_number,
            quantity: self.quantity,
            condition: self.condition,
            department_id: self.department_id,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EquipmentParams {
    pub inventory_number: String,
    pub name: String,
    pub category: EquipmentCategory,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub quantity: i32,
    pub condition: EquipmentCondition,
    pub department_id: i32,
    pub notes: Option<String>,
}

impl EquipmentParams {
    pub fn from_dto(dto: UpsertEquipmentDto) -> Self {
        Self {
            inventory_number: dto.inventory_number.trim().to_string(),
            name: dto.name,
            category: dto.category,
            model: dto.model,
            serial_number: dto.serial_number,
            quantity: dto.quantity,
            condition: dto.condition,
            department_id: dto.department_id,
            notes: dto.notes,
        }
    }
}

/// Filters for listing equipment. `None` fields are not applied.
#[derive(Debug, Clone, Default)]
pub struct EquipmentFilter {
    pub category: Option<EquipmentCategory>,
    pub condition: Option<EquipmentCondition>,
    pub department_id: Option<i32>,
}
