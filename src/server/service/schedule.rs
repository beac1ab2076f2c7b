use sea_orm::DatabaseConnection;

use crate::{
    model::notification::NotificationKind,
    server::{
        data::{department::DepartmentRepository, schedule::ScheduleRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            notification::NewNotification,
            page::Page,
            schedule::{Schedule, ScheduleFilter, ScheduleParams},
            user::User,
        },
        service::notification::{hub::NotificationHub, NotificationService},
        util::pagination::check_window,
    },
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a NotificationHub,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a NotificationHub) -> Self {
        Self { db, hub }
    }

    /// Creates a schedule entry. Entries for a department notify its active members.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - The created entry
    /// - `Err(AppError::BadRequest)` - Blank title, end not after start, or unknown department
    pub async fn create(&self, actor: &User, params: ScheduleParams) -> Result<Schedule, AppError> {
        self.validate(&params).await?;

        let schedule = ScheduleRepository::new(self.db)
            .create(actor.id, params)
            .await?;

        if let Some(department_id) = schedule.department_id {
            if let Err(e) = self.notify_department(department_id, &schedule).await {
                tracing::error!(
                    "Failed to notify department {} of schedule {}: {}",
                    department_id,
                    schedule.id,
                    e
                );
            }
        }

        Ok(schedule)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Schedule, AppError> {
        ScheduleRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(
        &self,
        filter: &ScheduleFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Schedule>, AppError> {
        check_window(page, per_page)?;

        let (items, total) = ScheduleRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        Ok(Page::new(items, total, page, per_page))
    }

    /// Updates an entry. Only its creator or an admin may do so.
    pub async fn update(&self, actor: &User, id: i32, params: ScheduleParams) -> Result<Schedule, AppError> {
        let schedule = self.get_by_id(id).await?;
        ensure_owner(actor, &schedule)?;
        self.validate(&params).await?;

        Ok(ScheduleRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes an entry. Only its creator or an admin may do so.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let schedule = self.get_by_id(id).await?;
        ensure_owner(actor, &schedule)?;

        ScheduleRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn notify_department(&self, department_id: i32, schedule: &Schedule) -> Result<(), AppError> {
        let recipients = UserRepository::new(self.db)
            .get_active_ids_by_departments(&[department_id])
            .await?;
        let notification = NewNotification::new(
            NotificationKind::Schedule,
            "New schedule entry",
            format!(
                "{} starts at {}",
                schedule.title,
                schedule.starts_at.format("%Y-%m-%d %H:%M UTC")
            ),
        );

        NotificationService::new(self.db, self.hub)
            .notify(&recipients, notification)
            .await?;

        Ok(())
    }

    async fn validate(&self, params: &ScheduleParams) -> Result<(), AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::BadRequest("Schedule title is required".to_string()));
        }
        if params.ends_at <= params.starts_at {
            return Err(AppError::BadRequest(
                "Schedule must end after it starts".to_string(),
            ));
        }
        if let Some(department_id) = params.department_id {
            if !DepartmentRepository::new(self.db).exists(department_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Department {} does not exist",
                    department_id
                )));
            }
        }

        Ok(())
    }
}

fn ensure_owner(actor: &User, schedule: &Schedule) -> Result<(), AppError> {
    if schedule.created_by != actor.id && !actor.is_admin() {
        return Err(AuthError::AccessDenied(
            actor.id,
            format!("Schedule {} belongs to another user", schedule.id),
        )
        .into());
    }

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Schedule {} not found", id))
}
