use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::notification::NotificationKind,
    server::model::notification::{NewNotification, Notification},
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts one notification per recipient.
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - Created notifications in recipient order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_many(
        &self,
        user_ids: &[i32],
        notification: &NewNotification,
    ) -> Result<Vec<Notification>, DbErr> {
        let now = Utc::now();
        let mut created = Vec::with_capacity(user_ids.len());

        for &user_id in user_ids {
            let entity = entity::notification::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                kind: ActiveValue::Set(notification.kind.as_str().to_string()),
                title: ActiveValue::Set(notification.title.clone()),
                message: ActiveValue::Set(notification.message.clone()),
                document_id: ActiveValue::Set(notification.document_id),
                read: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            created.push(Notification::from_entity(entity)?);
        }

        Ok(created)
    }

    /// Gets a user's notifications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Recipient
    /// - `unread_only` - Skip notifications already marked read
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of notifications per page
    pub async fn get_paginated_for_user(
        &self,
        user_id: i32,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notification>, u64), DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));
        if unread_only {
            query = query.filter(entity::notification::Column::Read.eq(false));
        }

        let paginator = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let notifications = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Notification::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((notifications, total))
    }

    pub async fn count_unread(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    /// Marks one of a user's notifications read.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The notification, now read
    /// - `Ok(None)` - No notification with that ID belongs to the user
    /// - `Err(DbErr)` - Database error
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(entity) = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if entity.read {
            return Notification::from_entity(entity).map(Some);
        }

        let mut active_model: entity::notification::ActiveModel = entity.into();
        active_model.read = ActiveValue::Set(true);
        let entity = active_model.update(self.db).await?;

        Notification::from_entity(entity).map(Some)
    }

    /// Marks all of a user's unread notifications read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications updated
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the IDs of users who already received a notification of `kind` about a document.
    pub async fn get_recipients_for_document(
        &self,
        kind: NotificationKind,
        document_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Notification::find()
            .select_only()
            .column(entity::notification::Column::UserId)
            .distinct()
            .filter(entity::notification::Column::Kind.eq(kind.as_str()))
            .filter(entity::notification::Column::DocumentId.eq(document_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
