use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test schedule entries.
///
/// Defaults to a one hour event starting a day from now with no department.
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    created_by: i32,
    department_id: Option<i32>,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
}

impl<'a> ScheduleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let starts_at = Utc::now() + Duration::days(1);

        Self {
            db,
            created_by,
            department_id: None,
            starts_at,
            ends_at: starts_at + Duration::hours(1),
        }
    }

    pub fn department_id(mut self, department_id: i32) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Sets the start and keeps a one hour duration.
    pub fn starts_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self.ends_at = starts_at + Duration::hours(1);
        self
    }

    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        let now = Utc::now();

        entity::schedule::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(format!("Briefing {}", next_id())),
            description: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            department_id: ActiveValue::Set(self.department_id),
            starts_at: ActiveValue::Set(self.starts_at),
            ends_at: ActiveValue::Set(self.ends_at),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a general schedule entry owned by `created_by`.
pub async fn create_schedule(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, created_by).build().await
}
