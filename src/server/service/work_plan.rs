use sea_orm::DatabaseConnection;

use crate::{
    model::{notification::NotificationKind, work_plan::WorkPlanStatus},
    server::{
        data::{department::DepartmentRepository, work_plan::WorkPlanRepository},
        error::{auth::AuthError, AppError},
        model::{
            notification::NewNotification,
            page::Page,
            user::User,
            work_plan::{WorkPlan, WorkPlanParams},
        },
        service::notification::{hub::NotificationHub, NotificationService},
        util::pagination::check_window,
    },
};

pub struct WorkPlanService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a NotificationHub,
}

impl<'a> WorkPlanService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a NotificationHub) -> Self {
        Self { db, hub }
    }

    pub async fn create(&self, actor: &User, params: WorkPlanParams) -> Result<WorkPlan, AppError> {
        self.validate(&params).await?;

        Ok(WorkPlanRepository::new(self.db)
            .create(actor.id, params)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<WorkPlan, AppError> {
        WorkPlanRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Work plan {} not found", id)))
    }

    pub async fn get_paginated(
        &self,
        department_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<WorkPlan>, AppError> {
        check_window(page, per_page)?;

        let (items, total) = WorkPlanRepository::new(self.db)
            .get_paginated(department_id, page, per_page)
            .await?;

        Ok(Page::new(items, total, page, per_page))
    }

    /// Updates a plan that is still a draft. Only the author or an admin may edit it.
    ///
    /// # Returns
    /// - `Ok(WorkPlan)` - The updated plan
    /// - `Err(AppError::AuthErr)` - Actor is neither the author nor an admin
    /// - `Err(AppError::Conflict)` - Plan has already been approved
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: WorkPlanParams,
    ) -> Result<WorkPlan, AppError> {
        let plan = self.get_by_id(id).await?;
        ensure_owner(actor, &plan)?;
        ensure_draft(&plan)?;
        self.validate(&params).await?;

        Ok(WorkPlanRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let plan = self.get_by_id(id).await?;
        ensure_owner(actor, &plan)?;
        ensure_draft(&plan)?;

        WorkPlanRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Approves a draft plan, recording the approver and notifying the author.
    pub async fn approve(&self, actor: &User, id: i32) -> Result<WorkPlan, AppError> {
        let plan = self.advance(id, WorkPlanStatus::Approved, Some(actor.id)).await?;
        tracing::info!("User {} approved work plan {}", actor.id, id);

        if plan.created_by != actor.id {
            let notification = NewNotification::new(
                NotificationKind::WorkPlan,
                "Work plan approved",
                format!("Work plan \"{}\" was approved", plan.title),
            );

            if let Err(e) = NotificationService::new(self.db, self.hub)
                .notify(&[plan.created_by], notification)
                .await
            {
                tracing::error!("Failed to notify author of work plan {}: {}", id, e);
            }
        }

        Ok(plan)
    }

    pub async fn start(&self, id: i32) -> Result<WorkPlan, AppError> {
        self.advance(id, WorkPlanStatus::InProgress, None).await
    }

    pub async fn complete(&self, id: i32) -> Result<WorkPlan, AppError> {
        self.advance(id, WorkPlanStatus::Completed, None).await
    }

    /// Moves a plan one step along DRAFT -> APPROVED -> IN_PROGRESS -> COMPLETED.
    async fn advance(
        &self,
        id: i32,
        target: WorkPlanStatus,
        approved_by: Option<i32>,
    ) -> Result<WorkPlan, AppError> {
        let plan = self.get_by_id(id).await?;

        let refused = || {
            AppError::Conflict(format!(
                "Work plan {} cannot move from {} to {}",
                id,
                plan.status.as_str(),
                target.as_str()
            ))
        };

        if plan.status.next() != Some(target) {
            return Err(refused());
        }

        WorkPlanRepository::new(self.db)
            .set_status(id, plan.status, target, approved_by)
            .await?
            .ok_or_else(refused)
    }

    async fn validate(&self, params: &WorkPlanParams) -> Result<(), AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::BadRequest("Work plan title is required".to_string()));
        }
        if params.period_end < params.period_start {
            return Err(AppError::BadRequest(
                "Work plan period must not end before it starts".to_string(),
            ));
        }
        if !DepartmentRepository::new(self.db)
            .exists(params.department_id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Department {} does not exist",
                params.department_id
            )));
        }

        Ok(())
    }
}

fn ensure_owner(actor: &User, plan: &WorkPlan) -> Result<(), AppError> {
    if plan.created_by != actor.id && !actor.is_admin() {
        return Err(AuthError::AccessDenied(
            actor.id,
            format!("Work plan {} belongs to another user", plan.id),
        )
        .into());
    }

    Ok(())
}

fn ensure_draft(plan: &WorkPlan) -> Result<(), AppError> {
    if plan.status != WorkPlanStatus::Draft {
        return Err(AppError::Conflict(format!(
            "Work plan {} is {} and can no longer be changed",
            plan.id,
            plan.status.as_str()
        )));
    }

    Ok(())
}
