use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    kind: String,
    document_id: Option<i32>,
    read: bool,
}

impl<'a> NotificationFactory<'a> {
    /// Creates an unread `STATUS_CHANGED` notification for `user_id`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            kind: "STATUS_CHANGED".to_string(),
            document_id: None,
            read: false,
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn document_id(mut self, document_id: i32) -> Self {
        self.document_id = Some(document_id);
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            kind: ActiveValue::Set(self.kind),
            title: ActiveValue::Set("Test notification".to_string()),
            message: ActiveValue::Set("Something happened".to_string()),
            document_id: ActiveValue::Set(self.document_id),
            read: ActiveValue::Set(self.read),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread notification for `user_id`.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
