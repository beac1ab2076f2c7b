use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Correspondence direction of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    Incoming,
    Outgoing,
    Internal,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incoming => "INCOMING",
            Self::Outgoing => "OUTGOING",
            Self::Internal => "INTERNAL",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "INCOMING" => Some(Self::Incoming),
            "OUTGOING" => Some(Self::Outgoing),
            "INTERNAL" => Some(Self::Internal),
            _ => None,
        }
    }

    /// Prefix used when generating registration numbers, e.g. `IN-2026-00042`.
    pub fn registration_prefix(&self) -> &'static str {
        match self {
            Self::Incoming => "IN",
            Self::Outgoing => "OUT",
            Self::Internal => "INT",
        }
    }
}

/// Processing stage of a document.
///
/// The regular path is `DRAFT -> REGISTERED -> DISTRIBUTED -> IN_PROGRESS -> UNDER_REVIEW ->
/// EXECUTED -> ARCHIVED`, with `SENT` between `EXECUTED` and `ARCHIVED` for outgoing mail.
/// [`DocumentStatus::next_statuses`] holds the full transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Draft,
    Registered,
    Distributed,
    InProgress,
    UnderReview,
    Returned,
    Executed,
    Sent,
    Archived,
    Cancelled,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 10] = [
        Self::Draft,
        Self::Registered,
        Self::Distributed,
        Self::InProgress,
        Self::UnderReview,
        Self::Returned,
        Self::Executed,
        Self::Sent,
        Self::Archived,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Registered => "REGISTERED",
            Self::Distributed => "DISTRIBUTED",
            Self::InProgress => "IN_PROGRESS",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Returned => "RETURNED",
            Self::Executed => "EXECUTED",
            Self::Sent => "SENT",
            Self::Archived => "ARCHIVED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    /// Human readable name shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Registered => "Registered",
            Self::Distributed => "Distributed",
            Self::InProgress => "In progress",
            Self::UnderReview => "Under review",
            Self::Returned => "Returned for rework",
            Self::Executed => "Executed",
            Self::Sent => "Sent",
            Self::Archived => "Archived",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Statuses after which the document no longer needs attention. Deadline reminders
    /// skip documents in these states.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            Self::Executed | Self::Sent | Self::Archived | Self::Cancelled
        )
    }

    /// Statuses reachable from `self` in a single workflow step.
    pub fn next_statuses(&self) -> &'static [DocumentStatus] {
        match self {
            Self::Draft => &[Self::Registered, Self::Cancelled],
            Self::Registered => &[
                Self::Distributed,
                Self::InProgress,
                Self::Archived,
                Self::Cancelled,
            ],
            Self::Distributed => &[Self::InProgress, Self::Returned],
            Self::InProgress => &[Self::UnderReview, Self::Executed, Self::Returned],
            Self::UnderReview => &[Self::Executed, Self::Returned],
            Self::Returned => &[Self::InProgress, Self::Distributed],
            Self::Executed => &[Self::Sent, Self::Archived],
            Self::Sent => &[Self::Archived],
            Self::Archived | Self::Cancelled => &[],
        }
    }

    /// Whether a document of `kind` may move from `self` to `target`.
    ///
    /// Only outgoing correspondence can be sent.
    pub fn can_transition_to(&self, target: DocumentStatus, kind: DocumentKind) -> bool {
        if target == Self::Sent && kind != DocumentKind::Outgoing {
            return false;
        }

        self.next_statuses().contains(&target)
    }

    /// Whether the document content (title, summary, details) may still be edited.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft | Self::Registered)
    }
}

/// Handling restriction of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityLevel {
    Unclassified,
    Restricted,
    Secret,
}

impl SecurityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unclassified => "UNCLASSIFIED",
            Self::Restricted => "RESTRICTED",
            Self::Secret => "SECRET",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "UNCLASSIFIED" => Some(Self::Unclassified),
            "RESTRICTED" => Some(Self::Restricted),
            "SECRET" => Some(Self::Secret),
            _ => None,
        }
    }
}

/// Kind of entry in a document's history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction {
    Created,
    Updated,
    Registered,
    Assigned,
    StatusChanged,
    Sent,
    Archived,
}

impl HistoryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Updated => "UPDATED",
            Self::Registered => "REGISTERED",
            Self::Assigned => "ASSIGNED",
            Self::StatusChanged => "STATUS_CHANGED",
            Self::Sent => "SENT",
            Self::Archived => "ARCHIVED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CREATED" => Some(Self::Created),
            "UPDATED" => Some(Self::Updated),
            "REGISTERED" => Some(Self::Registered),
            "ASSIGNED" => Some(Self::Assigned),
            "STATUS_CHANGED" => Some(Self::StatusChanged),
            "SENT" => Some(Self::Sent),
            "ARCHIVED" => Some(Self::Archived),
            _ => None,
        }
    }
}

/// Kind-specific document fields. The variant determines the document kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentDetailsDto {
    Incoming {
        sender_organization: String,
        sender_reference: Option<String>,
        received_at: Option<DateTime<Utc>>,
    },
    Outgoing {
        recipient_organization: String,
        signed_by: Option<i32>,
        sent_at: Option<DateTime<Utc>>,
    },
    Internal {
        target_department_id: i32,
        #[serde(default)]
        urgent: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DocumentDto {
    pub id: i32,
    pub kind: DocumentKind,
    pub registration_number: Option<String>,
    pub title: String,
    pub summary: Option<String>,
    pub status: DocumentStatus,
    pub status_display: String,
    pub security_level: SecurityLevel,
    pub department_id: i32,
    pub created_by: i32,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub details: DocumentDetailsDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssignmentDto {
    pub id: i32,
    pub department_id: i32,
    pub assigned_by: i32,
    pub assigned_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntryDto {
    pub id: i32,
    pub action: HistoryAction,
    pub from_status: Option<DocumentStatus>,
    pub to_status: DocumentStatus,
    pub user_id: i32,
    pub department_id: Option<i32>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A document together with its department assignments and full history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DocumentWithRelationsDto {
    pub document: DocumentDto,
    pub assignments: Vec<AssignmentDto>,
    pub history: Vec<HistoryEntryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDocumentDto {
    pub title: String,
    pub summary: Option<String>,
    pub security_level: Option<SecurityLevel>,
    pub department_id: i32,
    pub deadline: Option<DateTime<Utc>>,
    pub details: DocumentDetailsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateDocumentDto {
    pub title: String,
    pub summary: Option<String>,
    pub security_level: SecurityLevel,
    pub deadline: Option<DateTime<Utc>>,
    pub details: DocumentDetailsDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RegisterDocumentDto {
    pub registration_number: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DistributeDocumentDto {
    pub department_ids: Vec<i32>,
    pub due_date: Option<DateTime<Utc>>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangeStatusDto {
    pub status: DocumentStatus,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub comment: Option<String>,
}
