use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::notification::{NotificationDto, NotificationKind},
    server::util::parse::parse_stored,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    /// Recipient.
    pub user_id: i32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub document_id: Option<i32>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: parse_stored("notification.kind", &entity.kind, NotificationKind::parse)?,
            title: entity.title,
            message: entity.message,
            document_id: entity.document_id,
            read: entity.read,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            user_id: self.user_id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            document_id: self.document_id,
            read: self.read,
            created_at: self.created_at,
        }
    }
}

/// Content of a notification fanned out to one or more recipients.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub document_id: Option<i32>,
}

impl NewNotification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            document_id: None,
        }
    }

    pub fn with_document(mut self, document_id: i32) -> Self {
        self.document_id = Some(document_id);
        self
    }
}
