use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::notification::NotificationKind,
    server::{
        data::{notification::NotificationRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{schedule::ScheduleParams, user::User},
        service::{notification::hub::NotificationHub, schedule::ScheduleService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod ownership;

async fn load_user(db: &DatabaseConnection, id: i32) -> Result<User, DbErr> {
    UserRepository::new(db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("User {}", id)))
}

fn params(department_id: Option<i32>) -> ScheduleParams {
    let starts_at = Utc::now() + Duration::days(2);

    ScheduleParams {
        title: "Morning formation".to_string(),
        description: None,
        location: Some("Parade ground".to_string()),
        department_id,
        starts_at,
        ends_at: starts_at + Duration::minutes(30),
    }
}
