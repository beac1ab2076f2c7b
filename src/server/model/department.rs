//! Department domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto};

/// Organizational unit that owns documents, users, and equipment.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i32,
    pub name: String,
    /// Short unique code, e.g. `HQ` or `LOG-2`.
    pub code: String,
    /// Parent unit in the command hierarchy.
    pub parent_id: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    /// Converts an entity model to a department domain model at the repository boundary.
    pub fn from_entity(entity: entity::department::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            parent_id: entity.parent_id,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DepartmentDto {
        DepartmentDto {
            id: self.id,
            name: self.name,
            code: self.code,
            parent_id: self.parent_id,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating or updating a department.
#[derive(Debug, Clone)]
pub struct DepartmentParams {
    pub name: String,
    pub code: String,
    pub parent_id: Option<i32>,
    pub description: Option<String>,
}

impl DepartmentParams {
    pub fn from_create_dto(dto: CreateDepartmentDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            code: dto.code.trim().to_string(),
            parent_id: dto.parent_id,
            description: dto.description,
        }
    }

    pub fn from_update_dto(dto: UpdateDepartmentDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            code: dto.code.trim().to_string(),
            parent_id: dto.parent_id,
            description: dto.description,
        }
    }
}
