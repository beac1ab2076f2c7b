//! Department data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::department::{Department, DepartmentParams};

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new department.
    ///
    /// # Returns
    /// - `Ok(Department)` - The created department
    /// - `Err(DbErr)` - Database error, including unique violations on name or code
    pub async fn create(&self, params: DepartmentParams) -> Result<Department, DbErr> {
        let now = Utc::now();

        let entity = entity::department::ActiveModel {
            name: ActiveValue::Set(params.name),
            code: ActiveValue::Set(params.code),
            parent_id: ActiveValue::Set(params.parent_id),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Department::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Department>, DbErr> {
        let entity = entity::prelude::Department::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Department::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Department::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets paginated departments ordered by name.
    ///
    /// # Returns
    /// - `Ok((departments, total))` - Departments for the requested page and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Department>, u64), DbErr> {
        let paginator = entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Department::from_entity).collect(),
            total,
        ))
    }

    /// Updates a department's fields.
    ///
    /// # Returns
    /// - `Ok(Department)` - The updated department
    /// - `Err(DbErr::RecordNotFound)` - No department with that ID
    pub async fn update(&self, id: i32, params: DepartmentParams) -> Result<Department, DbErr> {
        let entity = entity::prelude::Department::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Department with id {} not found", id)))?;

        let mut active_model: entity::department::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.code = ActiveValue::Set(params.code);
        active_model.parent_id = ActiveValue::Set(params.parent_id);
        active_model.description = ActiveValue::Set(params.description);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Department::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Department::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether any user, document, assignment, equipment item, schedule or work
    /// plan still references the department.
    pub async fn is_referenced(&self, id: i32) -> Result<bool, DbErr> {
        let users = entity::prelude::User::find()
            .filter(entity::user::Column::DepartmentId.eq(id))
            .count(self.db)
            .await?;
        if users > 0 {
            return Ok(true);
        }

        let documents = entity::prelude::Document::find()
            .filter(entity::document::Column::DepartmentId.eq(id))
            .count(self.db)
            .await?;
        if documents > 0 {
            return Ok(true);
        }

        let assignments = entity::prelude::DocumentAssignment::find()
            .filter(entity::document_assignment::Column::DepartmentId.eq(id))
            .count(self.db)
            .await?;
        if assignments > 0 {
            return Ok(true);
        }

        let equipment = entity::prelude::Equipment::find()
            .filter(entity::equipment::Column::DepartmentId.eq(id))
            .count(self.db)
            .await?;
        if equipment > 0 {
            return Ok(true);
        }

        let schedules = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::DepartmentId.eq(id))
            .count(self.db)
            .await?;
        if schedules > 0 {
            return Ok(true);
        }

        let work_plans = entity::prelude::WorkPlan::find()
            .filter(entity::work_plan::Column::DepartmentId.eq(id))
            .count(self.db)
            .await?;

        Ok(work_plans > 0)
    }
}
