//! Document domain models and parameters.
//!
//! A document is a base record plus exactly one kind-specific detail record (incoming,
//! outgoing or internal). Assignments link a document to the departments that must
//! process it and the history log records every workflow action taken on it.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::document::{
        AssignmentDto, CreateDocumentDto, DocumentDetailsDto, DocumentDto, DocumentKind,
        DocumentStatus, DocumentWithRelationsDto, HistoryAction, HistoryEntryDto, SecurityLevel,
        UpdateDocumentDto,
    },
    server::util::parse::parse_stored,
};

/// Kind-specific document fields.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentDetails {
    Incoming {
        sender_organization: String,
        sender_reference: Option<String>,
        received_at: Option<DateTime<Utc>>,
    },
    Outgoing {
        recipient_organization: String,
        /// User who signed the outgoing letter.
        signed_by: Option<i32>,
        sent_at: Option<DateTime<Utc>>,
    },
    Internal {
        target_department_id: i32,
        urgent: bool,
    },
}

impl DocumentDetails {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Incoming { .. } => DocumentKind::Incoming,
            Self::Outgoing { .. } => DocumentKind::Outgoing,
            Self::Internal { .. } => DocumentKind::Internal,
        }
    }

    pub fn from_dto(dto: DocumentDetailsDto) -> Self {
        match dto {
            DocumentDetailsDto::Incoming {
                sender_organization,
                sender_reference,
                received_at,
            } => Self::Incoming {
                sender_organization,
                sender_reference,
                received_at,
            },
            DocumentDetailsDto::Outgoing {
                recipient_organization,
                signed_by,
                sent_at,
            } => Self::Outgoing {
                recipient_organization,
                signed_by,
                sent_at,
            },
            DocumentDetailsDto::Internal {
                target_department_id,
                urgent,
            } => Self::Internal {
                target_department_id,
                urgent,
            },
        }
    }

    pub fn into_dto(self) -> DocumentDetailsDto {
        match self {
            Self::Incoming {
                sender_organization,
                sender_reference,
                received_at,
            } => DocumentDetailsDto::Incoming {
                sender_organization,
                sender_reference,
                received_at,
            },
            Self::Outgoing {
                recipient_organization,
                signed_by,
                sent_at,
            } => DocumentDetailsDto::Outgoing {
                recipient_organization,
                signed_by,
                sent_at,
            },
            Self::Internal {
                target_department_id,
                urgent,
            } => DocumentDetailsDto::Internal {
                target_department_id,
                urgent,
            },
        }
    }
}

/// Detail rows loaded alongside a document. At most one is expected to be present.
#[derive(Debug, Clone, Default)]
pub struct DetailRows {
    pub incoming: Option<entity::incoming_document::Model>,
    pub outgoing: Option<entity::outgoing_document::Model>,
    pub internal: Option<entity::internal_document::Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i32,
    pub kind: DocumentKind,
    /// Assigned at registration, e.g. `IN-2026-00042`.
    pub registration_number: Option<String>,
    pub title: String,
    pub summary: Option<String>,
    pub status: DocumentStatus,
    pub security_level: SecurityLevel,
    /// Owning department.
    pub department_id: i32,
    pub created_by: i32,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub details: DocumentDetails,
}

impl Document {
    /// Converts a document entity and its detail rows to a domain model.
    ///
    /// # Returns
    /// - `Ok(Document)` - Successfully converted document
    /// - `Err(DbErr::Type)` - Unknown kind, status or security level stored
    /// - `Err(DbErr::RecordNotFound)` - Detail row for the document's kind is missing
    pub fn from_entity(entity: entity::document::Model, rows: DetailRows) -> Result<Self, DbErr> {
        let kind = parse_stored("document.kind", &entity.kind, DocumentKind::parse)?;
        let status = parse_stored("document.status", &entity.status, DocumentStatus::parse)?;
        let security_level = parse_stored(
            "document.security_level",
            &entity.security_level,
            SecurityLevel::parse,
        )?;

        let missing = || {
            DbErr::RecordNotFound(format!(
                "{} details for document {} not found",
                kind.as_str(),
                entity.id
            ))
        };

        let details = match kind {
            DocumentKind::Incoming => {
                let row = rows.incoming.ok_or_else(missing)?;
                DocumentDetails::Incoming {
                    sender_organization: row.sender_organization,
                    sender_reference: row.sender_reference,
                    received_at: row.received_at,
                }
            }
            DocumentKind::Outgoing => {
                let row = rows.outgoing.ok_or_else(missing)?;
                DocumentDetails::Outgoing {
                    recipient_organization: row.recipient_organization,
                    signed_by: row.signed_by,
                    sent_at: row.sent_at,
                }
            }
            DocumentKind::Internal => {
                let row = rows.internal.ok_or_else(missing)?;
                DocumentDetails::Internal {
                    target_department_id: row.target_department_id,
                    urgent: row.urgent,
                }
            }
        };

        Ok(Self {
            id: entity.id,
            kind,
            registration_number: entity.registration_number,
            title: entity.title,
            summary: entity.summary,
            status,
            security_level,
            department_id: entity.department_id,
            created_by: entity.created_by,
            deadline: entity.deadline,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            details,
        })
    }

    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.id,
            kind: self.kind,
            registration_number: self.registration_number,
            title: self.title,
            summary: self.summary,
            status: self.status,
            status_display: self.status.display_name().to_string(),
            security_level: self.security_level,
            department_id: self.department_id,
            created_by: self.created_by,
            deadline: self.deadline,
            created_at: self.created_at,
            updated_at: self.updated_at,
            details: self.details.into_dto(),
        }
    }
}

/// Department assignment of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: i32,
    pub document_id: i32,
    pub department_id: i32,
    pub assigned_by: i32,
    pub assigned_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    /// Set once the department reports the document executed.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Assignment {
    pub fn from_entity(entity: entity::document_assignment::Model) -> Self {
        Self {
            id: entity.id,
            document_id: entity.document_id,
            department_id: entity.department_id,
            assigned_by: entity.assigned_by,
            assigned_at: entity.assigned_at,
            due_date: entity.due_date,
            completed_at: entity.completed_at,
        }
    }

    pub fn into_dto(self) -> AssignmentDto {
        AssignmentDto {
            id: self.id,
            department_id: self.department_id,
            assigned_by: self.assigned_by,
            assigned_at: self.assigned_at,
            due_date: self.due_date,
            completed_at: self.completed_at,
        }
    }
}

/// One row of a document's history log.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: i32,
    pub document_id: i32,
    pub action: HistoryAction,
    pub from_status: Option<DocumentStatus>,
    pub to_status: DocumentStatus,
    /// User who performed the action.
    pub user_id: i32,
    pub department_id: Option<i32>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn from_entity(entity: entity::document_history::Model) -> Result<Self, DbErr> {
        let from_status = entity
            .from_status
            .as_deref()
            .map(|value| parse_stored("document_history.from_status", value, DocumentStatus::parse))
            .transpose()?;

        Ok(Self {
            id: entity.id,
            document_id: entity.document_id,
            action: parse_stored(
                "document_history.action",
                &entity.action,
                HistoryAction::parse,
            )?,
            from_status,
            to_status: parse_stored(
                "document_history.to_status",
                &entity.to_status,
                DocumentStatus::parse,
            )?,
            user_id: entity.user_id,
            department_id: entity.department_id,
            comment: entity.comment,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> HistoryEntryDto {
        HistoryEntryDto {
            id: self.id,
            action: self.action,
            from_status: self.from_status,
            to_status: self.to_status,
            user_id: self.user_id,
            department_id: self.department_id,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

/// A document with its assignments and history, oldest history entry first.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentWithRelations {
    pub document: Document,
    pub assignments: Vec<Assignment>,
    pub history: Vec<HistoryEntry>,
}

impl DocumentWithRelations {
    pub fn into_dto(self) -> DocumentWithRelationsDto {
        DocumentWithRelationsDto {
            document: self.document.into_dto(),
            assignments: self
                .assignments
                .into_iter()
                .map(Assignment::into_dto)
                .collect(),
            history: self.history.into_iter().map(HistoryEntry::into_dto).collect(),
        }
    }
}

/// Parameters for creating a draft document.
#[derive(Debug, Clone)]
pub struct CreateDocumentParams {
    pub title: String,
    pub summary: Option<String>,
    pub security_level: SecurityLevel,
    pub department_id: i32,
    pub created_by: i32,
    pub deadline: Option<DateTime<Utc>>,
    pub details: DocumentDetails,
}

impl CreateDocumentParams {
    pub fn from_dto(created_by: i32, dto: CreateDocumentDto) -> Self {
        Self {
            title: dto.title,
            summary: dto.summary,
            security_level: dto.security_level.unwrap_or(SecurityLevel::Unclassified),
            department_id: dto.department_id,
            created_by,
            deadline: dto.deadline,
            details: DocumentDetails::from_dto(dto.details),
        }
    }
}

/// Parameters for editing a document's content.
#[derive(Debug, Clone)]
pub struct UpdateDocumentParams {
    pub title: String,
    pub summary: Option<String>,
    pub security_level: SecurityLevel,
    pub deadline: Option<DateTime<Utc>>,
    pub details: DocumentDetails,
}

impl UpdateDocumentParams {
    pub fn from_dto(dto: UpdateDocumentDto) -> Self {
        Self {
            title: dto.title,
            summary: dto.summary,
            security_level: dto.security_level,
            deadline: dto.deadline,
            details: DocumentDetails::from_dto(dto.details),
        }
    }
}

/// Filters for listing documents. `None` fields are not applied.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub kind: Option<DocumentKind>,
    pub status: Option<DocumentStatus>,
    pub department_id: Option<i32>,
    /// Case-insensitive substring match on title or registration number.
    pub search: Option<String>,
    /// Restricts the listing to documents owned by or assigned to this department.
    pub visible_to_department: Option<i32>,
}

/// A history row to be written together with a status change.
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub action: HistoryAction,
    pub from_status: Option<DocumentStatus>,
    pub to_status: DocumentStatus,
    pub user_id: i32,
    pub department_id: Option<i32>,
    pub comment: Option<String>,
}
