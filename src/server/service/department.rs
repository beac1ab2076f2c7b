use sea_orm::DatabaseConnection;

use crate::server::{
    data::department::DepartmentRepository,
    error::AppError,
    model::{
        department::{Department, DepartmentParams},
        page::Page,
    },
    util::pagination::check_window,
};

pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a department after validating its parent.
    ///
    /// # Returns
    /// - `Ok(Department)` - The created department
    /// - `Err(AppError::BadRequest)` - Blank name/code or unknown parent
    /// - `Err(AppError::DbErr)` - Name or code already taken (409)
    pub async fn create(&self, params: DepartmentParams) -> Result<Department, AppError> {
        validate(&params)?;
        self.validate_parent(None, params.parent_id).await?;

        let department = DepartmentRepository::new(self.db).create(params).await?;
        tracing::info!("Created department {} ({})", department.code, department.id);

        Ok(department)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Department, AppError> {
        DepartmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Page<Department>, AppError> {
        check_window(page, per_page)?;

        let (items, total) = DepartmentRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(Page::new(items, total, page, per_page))
    }

    /// Updates a department.
    ///
    /// # Returns
    /// - `Ok(Department)` - The updated department
    /// - `Err(AppError::NotFound)` - No department with that ID
    /// - `Err(AppError::BadRequest)` - Parent is unknown or the department itself
    pub async fn update(&self, id: i32, params: DepartmentParams) -> Result<Department, AppError> {
        let repo = DepartmentRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(not_found(id));
        }
        validate(&params)?;
        self.validate_parent(Some(id), params.parent_id).await?;

        Ok(repo.update(id, params).await?)
    }

    /// Deletes a department that nothing references.
    ///
    /// # Returns
    /// - `Ok(())` - Department deleted
    /// - `Err(AppError::NotFound)` - No department with that ID
    /// - `Err(AppError::Conflict)` - Users, documents, equipment, schedules or work plans
    ///   still reference the department
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DepartmentRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(not_found(id));
        }
        if repo.is_referenced(id).await? {
            return Err(AppError::Conflict(format!(
                "Department {} is still referenced and cannot be deleted",
                id
            )));
        }

        repo.delete(id).await?;
        tracing::info!("Deleted department {}", id);

        Ok(())
    }

    async fn validate_parent(&self, id: Option<i32>, parent_id: Option<i32>) -> Result<(), AppError> {
        let Some(parent_id) = parent_id else {
            return Ok(());
        };

        if Some(parent_id) == id {
            return Err(AppError::BadRequest(
                "A department cannot be its own parent".to_string(),
            ));
        }
        if !DepartmentRepository::new(self.db).exists(parent_id).await? {
            return Err(AppError::BadRequest(format!(
                "Parent department {} does not exist",
                parent_id
            )));
        }

        Ok(())
    }
}

fn validate(params: &DepartmentParams) -> Result<(), AppError> {
    if params.name.trim().is_empty() || params.code.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Department name and code are required".to_string(),
        ));
    }

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Department {} not found", id))
}
