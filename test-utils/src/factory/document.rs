//! Document factory for creating test documents with their detail row.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test documents.
///
/// Defaults to an incoming, unclassified `DRAFT` document without a deadline. The detail
/// row matching the kind is inserted alongside the base record. Internal documents target
/// the owning department unless `target_department_id` is set.
///
/// # Example
///
/// ```rust,ignore
/// let letter = DocumentFactory::new(&db, department.id, user.id)
///     .kind("OUTGOING")
///     .status("EXECUTED")
///     .registration_number(Some("OUT-2026-00001".into()))
///     .build()
///     .await?;
/// ```
pub struct DocumentFactory<'a> {
    db: &'a DatabaseConnection,
    kind: String,
    status: String,
    title: String,
    registration_number: Option<String>,
    security_level: String,
    department_id: i32,
    created_by: i32,
    deadline: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    target_department_id: Option<i32>,
}

impl<'a> DocumentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, department_id: i32, created_by: i32) -> Self {
        Self {
            db,
            kind: "INCOMING".to_string(),
            status: "DRAFT".to_string(),
            title: format!("Document {}", next_id()),
            registration_number: None,
            security_level: "UNCLASSIFIED".to_string(),
            department_id,
            created_by,
            deadline: None,
            created_at: Utc::now(),
            target_department_id: None,
        }
    }

    /// Sets the kind: `INCOMING`, `OUTGOING` or `INTERNAL`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn registration_number(mut self, number: Option<String>) -> Self {
        self.registration_number = number;
        self
    }

    pub fn security_level(mut self, level: impl Into<String>) -> Self {
        self.security_level = level.into();
        self
    }

    pub fn deadline(mut self, deadline: Option<DateTime<Utc>>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Overrides the creation timestamp, for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn target_department_id(mut self, department_id: i32) -> Self {
        self.target_department_id = Some(department_id);
        self
    }

    /// Builds and inserts the document and its detail row.
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        let document = entity::document::ActiveModel {
            id: ActiveValue::NotSet,
            kind: ActiveValue::Set(self.kind.clone()),
            registration_number: ActiveValue::Set(self.registration_number),
            title: ActiveValue::Set(self.title),
            summary: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            security_level: ActiveValue::Set(self.security_level),
            department_id: ActiveValue::Set(self.department_id),
            created_by: ActiveValue::Set(self.created_by),
            deadline: ActiveValue::Set(self.deadline),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await?;

        match self.kind.as_str() {
            "OUTGOING" => {
                entity::outgoing_document::ActiveModel {
                    document_id: ActiveValue::Set(document.id),
                    recipient_organization: ActiveValue::Set("Brigade HQ".to_string()),
                    signed_by: ActiveValue::Set(None),
                    sent_at: ActiveValue::Set(None),
                }
                .insert(self.db)
                .await?;
            }
            "INTERNAL" => {
                entity::internal_document::ActiveModel {
                    document_id: ActiveValue::Set(document.id),
                    target_department_id: ActiveValue::Set(
                        self.target_department_id.unwrap_or(self.department_id),
                    ),
                    urgent: ActiveValue::Set(false),
                }
                .insert(self.db)
                .await?;
            }
            _ => {
                entity::incoming_document::ActiveModel {
                    document_id: ActiveValue::Set(document.id),
                    sender_organization: ActiveValue::Set("Regional Command".to_string()),
                    sender_reference: ActiveValue::Set(None),
                    received_at: ActiveValue::Set(None),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(document)
    }
}

/// Creates an incoming draft document owned by `department_id`.
pub async fn create_document(
    db: &DatabaseConnection,
    department_id: i32,
    created_by: i32,
) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, department_id, created_by)
        .build()
        .await
}
