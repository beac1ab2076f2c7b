use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Assigns a document to a department, open and without due date.
///
/// # Arguments
/// - `db` - Database connection
/// - `document_id` - Document being assigned
/// - `department_id` - Department receiving the document
/// - `assigned_by` - User making the assignment
pub async fn create_assignment(
    db: &DatabaseConnection,
    document_id: i32,
    department_id: i32,
    assigned_by: i32,
) -> Result<entity::document_assignment::Model, DbErr> {
    entity::document_assignment::ActiveModel {
        id: ActiveValue::NotSet,
        document_id: ActiveValue::Set(document_id),
        department_id: ActiveValue::Set(department_id),
        assigned_by: ActiveValue::Set(assigned_by),
        assigned_at: ActiveValue::Set(Utc::now()),
        due_date: ActiveValue::Set(None),
        completed_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
