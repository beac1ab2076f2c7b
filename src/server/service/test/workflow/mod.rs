use chrono::{Datelike, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{
        document::{DocumentStatus, HistoryAction},
        notification::NotificationKind,
    },
    server::{
        data::{
            document::{assignment::DocumentAssignmentRepository, history::DocumentHistoryRepository},
            notification::NotificationRepository,
            user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::{document::DocumentDetails, user::User},
        service::{notification::hub::NotificationHub, workflow::WorkflowService},
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, document::DocumentFactory},
};

mod send_archive;

/// Creates a user in the department and loads it as the acting domain user.
async fn member(db: &DatabaseConnection, department_id: i32, roles: &[&str]) -> Result<User, DbErr> {
    let user = factory::create_user_with_roles(db, department_id, roles).await?;

    UserRepository::new(db)
        .get_by_id(user.id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("User {}", user.id)))
}
