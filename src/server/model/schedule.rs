use chrono::{DateTime, Utc};

use crate::model::schedule::{ScheduleDto, UpsertScheduleDto};

/// Calendar event, either unit-wide (`department_id` set) or general.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub department_id: Option<i32>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    pub fn from_entity(entity: entity::schedule::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            department_id: entity.department_id,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            id: self.id,
            title: self.title,
            description: self.description,
            location: self.location,
            department_id: self.department_id,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleParams {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub department_id: Option<i32>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl ScheduleParams {
    pub fn from_dto(dto: UpsertScheduleDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            location: dto.location,
            department_id: dto.department_id,
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
        }
    }
}

/// Filters for listing schedules.
///
/// The window is half-open: events starting at or after `from` and before `to`.
#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    pub department_id: Option<i32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}
