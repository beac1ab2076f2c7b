//! Notification persistence and live delivery.

pub mod hub;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{
        notification::{NewNotification, Notification},
        page::Page,
    },
    service::notification::hub::NotificationHub,
    util::pagination::check_window,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a NotificationHub,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a NotificationHub) -> Self {
        Self { db, hub }
    }

    /// Stores one notification per recipient and publishes each on the live hub.
    ///
    /// Duplicate recipient IDs receive a single notification.
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - Created notifications
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn notify(
        &self,
        user_ids: &[i32],
        notification: NewNotification,
    ) -> Result<Vec<Notification>, AppError> {
        let mut recipients = user_ids.to_vec();
        recipients.sort_unstable();
        recipients.dedup();

        if recipients.is_empty() {
            return Ok(Vec::new());
        }

        let created = NotificationRepository::new(self.db)
            .create_many(&recipients, &notification)
            .await?;

        for notification in &created {
            self.hub.publish(notification.clone());
        }

        Ok(created)
    }

    pub async fn list_for_user(
        &self,
        user_id: i32,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Notification>, AppError> {
        check_window(page, per_page)?;

        let (items, total) = NotificationRepository::new(self.db)
            .get_paginated_for_user(user_id, unread_only, page, per_page)
            .await?;

        Ok(Page::new(items, total, page, per_page))
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .count_unread(user_id)
            .await?)
    }

    /// Marks one of the user's notifications as read.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The updated notification
    /// - `Err(AppError::NotFound)` - No such notification for this user
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .mark_read(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    /// Marks all of the user's notifications as read and returns how many changed.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?)
    }
}
