use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::schedule::{Schedule, ScheduleFilter, ScheduleParams};

pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, created_by: i32, params: ScheduleParams) -> Result<Schedule, DbErr> {
        let now = Utc::now();

        let entity = entity::schedule::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            location: ActiveValue::Set(params.location),
            department_id: ActiveValue::Set(params.department_id),
            starts_at: ActiveValue::Set(params.starts_at),
            ends_at: ActiveValue::Set(params.ends_at),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Schedule::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Schedule>, DbErr> {
        let entity = entity::prelude::Schedule::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Schedule::from_entity))
    }

    /// Gets schedule entries matching `filter`, ordered by start time.
    ///
    /// # Returns
    /// - `Ok((schedules, total))` - Entries for the requested page and total match count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &ScheduleFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Schedule>, u64), DbErr> {
        let mut query = entity::prelude::Schedule::find();

        if let Some(department_id) = filter.department_id {
            query = query.filter(entity::schedule::Column::DepartmentId.eq(department_id));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::schedule::Column::StartsAt.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::schedule::Column::StartsAt.lt(to));
        }

        let paginator = query
            .order_by_asc(entity::schedule::Column::StartsAt)
            .order_by_asc(entity::schedule::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Schedule::from_entity).collect(), total))
    }

    /// Replaces a schedule entry's fields.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - The updated entry
    /// - `Err(DbErr::RecordNotFound)` - No entry with that ID
    pub async fn update(&self, id: i32, params: ScheduleParams) -> Result<Schedule, DbErr> {
        let entity = entity::prelude::Schedule::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Schedule with id {} not found", id)))?;

        let mut active_model: entity::schedule::ActiveModel = entity.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.description = ActiveValue::Set(params.description);
        active_model.location = ActiveValue::Set(params.location);
        active_model.department_id = ActiveValue::Set(params.department_id);
        active_model.starts_at = ActiveValue::Set(params.starts_at);
        active_model.ends_at = ActiveValue::Set(params.ends_at);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Schedule::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Schedule::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
