use sea_orm::DatabaseConnection;

use crate::server::{
    data::{department::DepartmentRepository, equipment::EquipmentRepository},
    error::AppError,
    model::{
        equipment::{Equipment, EquipmentFilter, EquipmentParams},
        page::Page,
    },
    util::pagination::check_window,
};

pub struct EquipmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an inventory item.
    ///
    /// # Returns
    /// - `Ok(Equipment)` - The created item
    /// - `Err(AppError::BadRequest)` - Blank inventory number or name, negative quantity,
    ///   or unknown department
    /// - `Err(AppError::DbErr)` - Inventory number already taken (409)
    pub async fn create(&self, params: EquipmentParams) -> Result<Equipment, AppError> {
        self.validate(&params).await?;

        let item = EquipmentRepository::new(self.db).create(params).await?;
        tracing::info!("Registered equipment {} ({})", item.inventory_number, item.id);

        Ok(item)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Equipment, AppError> {
        EquipmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    pub async fn get_paginated(
        &self,
        filter: &EquipmentFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Equipment>, AppError> {
        check_window(page, per_page)?;

        let (items, total) = EquipmentRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        Ok(Page::new(items, total, page, per_page))
    }

    /// Updates an item that has not been written off.
    pub async fn update(&self, id: i32, params: EquipmentParams) -> Result<Equipment, AppError> {
        let item = self.get_by_id(id).await?;
        ensure_in_service(&item)?;
        self.validate(&params).await?;

        Ok(EquipmentRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.get_by_id(id).await?;

        EquipmentRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Transfers an item that has not been written off to another department.
    ///
    /// # Returns
    /// - `Ok(Equipment)` - The transferred item
    /// - `Err(AppError::Conflict)` - Item is written off
    /// - `Err(AppError::BadRequest)` - Unknown target department
    pub async fn transfer(&self, id: i32, department_id: i32) -> Result<Equipment, AppError> {
        let item = self.get_by_id(id).await?;
        ensure_in_service(&item)?;
        self.validate_department(department_id).await?;

        let item = EquipmentRepository::new(self.db)
            .transfer(id, department_id)
            .await?;
        tracing::info!("Transferred equipment {} to department {}", id, department_id);

        Ok(item)
    }

    async fn validate(&self, params: &EquipmentParams) -> Result<(), AppError> {
        if params.inventory_number.trim().is_empty() || params.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Inventory number and name are required".to_string(),
            ));
        }
        if params.quantity < 0 {
            return Err(AppError::BadRequest(
                "Quantity must not be negative".to_string(),
            ));
        }

        self.validate_department(params.department_id).await
    }

    async fn validate_department(&self, department_id: i32) -> Result<(), AppError> {
        if !DepartmentRepository::new(self.db).exists(department_id).await? {
            return Err(AppError::BadRequest(format!(
                "Department {} does not exist",
                department_id
            )));
        }

        Ok(())
    }
}

fn ensure_in_service(item: &Equipment) -> Result<(), AppError> {
    if item.is_written_off() {
        return Err(AppError::Conflict(format!(
            "Equipment {} has been written off",
            item.inventory_number
        )));
    }

    Ok(())
}
