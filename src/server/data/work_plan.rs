use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::work_plan::WorkPlanStatus,
    server::model::work_plan::{WorkPlan, WorkPlanParams},
};

pub struct WorkPlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkPlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a work plan in `DRAFT` status.
    pub async fn create(&self, created_by: i32, params: WorkPlanParams) -> Result<WorkPlan, DbErr> {
        let now = Utc::now();

        let entity = entity::work_plan::ActiveModel {
            department_id: ActiveValue::Set(params.department_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            period_start: ActiveValue::Set(params.period_start),
            period_end: ActiveValue::Set(params.period_end),
            status: ActiveValue::Set(WorkPlanStatus::Draft.as_str().to_string()),
            created_by: ActiveValue::Set(created_by),
            approved_by: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        WorkPlan::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<WorkPlan>, DbErr> {
        entity::prelude::WorkPlan::find_by_id(id)
            .one(self.db)
            .await?
            .map(WorkPlan::from_entity)
            .transpose()
    }

    /// Gets work plans, latest period first, optionally for one department.
    pub async fn get_paginated(
        &self,
        department_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<WorkPlan>, u64), DbErr> {
        let mut query = entity::prelude::WorkPlan::find();
        if let Some(department_id) = department_id {
            query = query.filter(entity::work_plan::Column::DepartmentId.eq(department_id));
        }

        let paginator = query
            .order_by_desc(entity::work_plan::Column::PeriodStart)
            .order_by_desc(entity::work_plan::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let plans = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(WorkPlan::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((plans, total))
    }

    pub async fn update(&self, id: i32, params: WorkPlanParams) -> Result<WorkPlan, DbErr> {
        let mut active_model: entity::work_plan::ActiveModel = self.find_entity(id).await?.into();
        active_model.department_id = ActiveValue::Set(params.department_id);
        active_model.title = ActiveValue::Set(params.title);
        active_model.description = ActiveValue::Set(params.description);
        active_model.period_start = ActiveValue::Set(params.period_start);
        active_model.period_end = ActiveValue::Set(params.period_end);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        WorkPlan::from_entity(active_model.update(self.db).await?)
    }

    /// Moves a plan from `from` to `to`, recording the approver when one is given.
    ///
    /// # Returns
    /// - `Ok(Some(WorkPlan))` - The plan after the change
    /// - `Ok(None)` - No plan with that ID is in status `from`
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(
        &self,
        id: i32,
        from: WorkPlanStatus,
        to: WorkPlanStatus,
        approved_by: Option<i32>,
    ) -> Result<Option<WorkPlan>, DbErr> {
        let now = Utc::now();

        let mut update = entity::prelude::WorkPlan::update_many()
            .col_expr(entity::work_plan::Column::Status, Expr::value(to.as_str()))
            .col_expr(entity::work_plan::Column::UpdatedAt, Expr::value(now));
        if let Some(approver) = approved_by {
            update = update
                .col_expr(entity::work_plan::Column::ApprovedBy, Expr::value(Some(approver)))
                .col_expr(entity::work_plan::Column::ApprovedAt, Expr::value(Some(now)));
        }

        let result = update
            .filter(entity::work_plan::Column::Id.eq(id))
            .filter(entity::work_plan::Column::Status.eq(from.as_str()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::WorkPlan::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn find_entity(&self, id: i32) -> Result<entity::work_plan::Model, DbErr> {
        entity::prelude::WorkPlan::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Work plan with id {} not found", id)))
    }
}
