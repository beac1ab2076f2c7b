use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::equipment::{Equipment, EquipmentFilter, EquipmentParams};

pub struct EquipmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new inventory item.
    ///
    /// # Returns
    /// - `Ok(Equipment)` - The created item
    /// - `Err(DbErr)` - Database error, including a unique violation on inventory number
    pub async fn create(&self, params: EquipmentParams) -> Result<Equipment, DbErr> {
        let now = Utc::now();

        let entity = entity::equipment::ActiveModel {
            inventory_number: ActiveValue::Set(params.inventory_number),
            name: ActiveValue::Set(params.name),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            model: ActiveValue::Set(params.model),
            serial_number: ActiveValue::Set(params.serial_number),
            quantity: ActiveValue::Set(params.quantity),
            condition: ActiveValue::Set(params.condition.as_str().to_string()),
            department_id: ActiveValue::Set(params.department_id),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Equipment::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Equipment>, DbErr> {
        entity::prelude::Equipment::find_by_id(id)
            .one(self.db)
            .await?
            .map(Equipment::from_entity)
            .transpose()
    }

    /// Gets inventory items matching `filter`, ordered by inventory number.
    pub async fn get_paginated(
        &self,
        filter: &EquipmentFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Equipment>, u64), DbErr> {
        let mut query = entity::prelude::Equipment::find();

        if let Some(category) = filter.category {
            query = query.filter(entity::equipment::Column::Category.eq(category.as_str()));
        }
        if let Some(condition) = filter.condition {
            query = query.filter(entity::equipment::Column::Condition.eq(condition.as_str()));
        }
        if let Some(department_id) = filter.department_id {
            query = query.filter(entity::equipment::Column::DepartmentId.eq(department_id));
        }

        let paginator = query
            .order_by_asc(entity::equipment::Column::InventoryNumber)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Equipment::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((items, total))
    }

    pub async fn update(&self, id: i32, params: EquipmentParams) -> Result<Equipment, DbErr> {
        let mut active_model: entity::equipment::ActiveModel = self.find_entity(id).await?.into();
        active_model.inventory_number = ActiveValue::Set(params.inventory_number);
        active_model.name = ActiveValue::Set(params.name);
        active_model.category = ActiveValue::Set(params.category.as_str().to_string());
        active_model.model = ActiveValue::Set(params.model);
        active_model.serial_number = ActiveValue::Set(params.serial_number);
        active_model.quantity = ActiveValue::Set(params.quantity);
        active_model.condition = ActiveValue::Set(params.condition.as_str().to_string());
        active_model.department_id = ActiveValue::Set(params.department_id);
        active_model.notes = ActiveValue::Set(params.notes);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Equipment::from_entity(active_model.update(self.db).await?)
    }

    /// Moves an item to another department.
    pub async fn transfer(&self, id: i32, department_id: i32) -> Result<Equipment, DbErr> {
        let mut active_model: entity::equipment::ActiveModel = self.find_entity(id).await?.into();
        active_model.department_id = ActiveValue::Set(department_id);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Equipment::from_entity(active_model.update(self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Equipment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn find_entity(&self, id: i32) -> Result<entity::equipment::Model, DbErr> {
        entity::prelude::Equipment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Equipment with id {} not found", id)))
    }
}
