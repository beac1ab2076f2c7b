use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::document::Assignment;

pub struct DocumentAssignmentRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentAssignmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Assigns a document to a department.
    ///
    /// # Returns
    /// - `Ok(Assignment)` - The created assignment
    /// - `Err(DbErr)` - Database error, including a unique violation if the department
    ///   already holds an assignment for the document
    pub async fn create(
        &self,
        document_id: i32,
        department_id: i32,
        assigned_by: i32,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Assignment, DbErr> {
        let entity = entity::document_assignment::ActiveModel {
            document_id: ActiveValue::Set(document_id),
            department_id: ActiveValue::Set(department_id),
            assigned_by: ActiveValue::Set(assigned_by),
            assigned_at: ActiveValue::Set(Utc::now()),
            due_date: ActiveValue::Set(due_date),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Assignment::from_entity(entity))
    }

    /// Gets all assignments of a document in assignment order.
    pub async fn get_by_document(&self, document_id: i32) -> Result<Vec<Assignment>, DbErr> {
        let entities = entity::prelude::DocumentAssignment::find()
            .filter(entity::document_assignment::Column::DocumentId.eq(document_id))
            .order_by_asc(entity::document_assignment::Column::AssignedAt)
            .order_by_asc(entity::document_assignment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Assignment::from_entity).collect())
    }

    /// Marks a department's open assignment on a document completed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of assignments updated (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn complete(
        &self,
        document_id: i32,
        department_id: i32,
        at: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::DocumentAssignment::update_many()
            .col_expr(
                entity::document_assignment::Column::CompletedAt,
                Expr::value(Some(at)),
            )
            .filter(entity::document_assignment::Column::DocumentId.eq(document_id))
            .filter(entity::document_assignment::Column::DepartmentId.eq(department_id))
            .filter(entity::document_assignment::Column::CompletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
