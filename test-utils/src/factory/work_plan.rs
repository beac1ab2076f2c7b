use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test work plans.
///
/// Defaults to a `DRAFT` plan covering the next thirty days.
pub struct WorkPlanFactory<'a> {
    db: &'a DatabaseConnection,
    department_id: i32,
    created_by: i32,
    status: String,
}

impl<'a> WorkPlanFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, department_id: i32, created_by: i32) -> Self {
        Self {
            db,
            department_id,
            created_by,
            status: "DRAFT".to_string(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::work_plan::Model, DbErr> {
        let now = Utc::now();
        let today = now.date_naive();

        entity::work_plan::ActiveModel {
            id: ActiveValue::NotSet,
            department_id: ActiveValue::Set(self.department_id),
            title: ActiveValue::Set(format!("Plan {}", next_id())),
            description: ActiveValue::Set(None),
            period_start: ActiveValue::Set(today),
            period_end: ActiveValue::Set(today + Duration::days(30)),
            status: ActiveValue::Set(self.status),
            created_by: ActiveValue::Set(self.created_by),
            approved_by: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft work plan.
pub async fn create_work_plan(
    db: &DatabaseConnection,
    department_id: i32,
    created_by: i32,
) -> Result<entity::work_plan::Model, DbErr> {
    WorkPlanFactory::new(db, department_id, created_by)
        .build()
        .await
}
