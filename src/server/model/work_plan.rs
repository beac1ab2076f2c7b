use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::work_plan::{UpsertWorkPlanDto, WorkPlanDto, WorkPlanStatus},
    server::util::parse::parse_stored,
};

/// Department work plan for a period.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkPlan {
    pub id: i32,
    pub department_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub status: WorkPlanStatus,
    pub created_by: i32,
    pub approved_by: Option<i32>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkPlan {
    pub fn from_entity(entity: entity::work_plan::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            department_id: entity.department_id,
            title: entity.title,
            description: entity.description,
            period_start: entity.period_start,
            period_end: entity.period_end,
            status: parse_stored("work_plan.status", &entity.status, WorkPlanStatus::parse)?,
            created_by: entity.created_by,
            approved_by: entity.approved_by,
            approved_at: entity.approved_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> WorkPlanDto {
        WorkPlanDto {
            id: self.id,
            department_id: self.department_id,
            title: self.title,
            description: self.description,
            period_start: self.period_start,
            period_end: self.period_end,
            status: self.status,
            created_by: self.created_by,
            approved_by: self.approved_by,
            approved_at: self.approved_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorkPlanParams {
    pub department_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

impl WorkPlanParams {
    pub fn from_dto(dto: UpsertWorkPlanDto) -> Self {
        Self {
            department_id: dto.department_id,
            title: dto.title,
            description: dto.description,
            period_start: dto.period_start,
            period_end: dto.period_end,
        }
    }
}
