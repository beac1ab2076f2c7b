use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentCategory {
    Weapon,
    Vehicle,
    Ammunition,
    PowerStation,
    Other,
}

impl EquipmentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "WEAPON",
            Self::Vehicle => "VEHICLE",
            Self::Ammunition => "AMMUNITION",
            Self::PowerStation => "POWER_STATION",
            Self::Other => "OTHER",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "WEAPON" => Some(Self::Weapon),
            "VEHICLE" => Some(Self::Vehicle),
            "AMMUNITION" => Some(Self::Ammunition),
            "POWER_STATION" => Some(Self::PowerStation),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentCondition {
    Serviceable,
    NeedsRepair,
    Unserviceable,
    WrittenOff,
}

impl EquipmentCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Serviceable => "SERVICEABLE",
            Self::NeedsRepair => "NEEDS_REPAIR",
            Self::Unserviceable => "UNSERVICEABLE",
            Self::WrittenOff => "WRITTEN_OFF",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "SERVICEABLE" => Some(Self::Serviceable),
            "NEEDS_REPAIR" => Some(Self::NeedsRepair),
            "UNSERVICEABLE" => Some(Self::Unserviceable),
            "WRITTEN_OFF" => Some(Self::WrittenOff),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentDto {
    pub id: i32,
    pub inventory_number: String,
    pub name: String,
    pub category: EquipmentCategory,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub quantity: i32,
    pub condition: EquipmentCondition,
    pub department_id: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertEquipmentDto {
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

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferEquipmentDto {
    pub department_id: i32,
}
