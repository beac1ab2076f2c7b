use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    DocumentAssigned,
    StatusChanged,
    DeadlineApproaching,
    DeadlineOverdue,
    WorkPlan,
    Schedule,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentAssigned => "DOCUMENT_ASSIGNED",
            Self::StatusChanged => "STATUS_CHANGED",
            Self::DeadlineApproaching => "DEADLINE_APPROACHING",
            Self::DeadlineOverdue => "DEADLINE_OVERDUE",
            Self::WorkPlan => "WORK_PLAN",
            Self::Schedule => "SCHEDULE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "DOCUMENT_ASSIGNED" => Some(Self::DocumentAssigned),
            "STATUS_CHANGED" => Some(Self::StatusChanged),
            "DEADLINE_APPROACHING" => Some(Self::DeadlineApproaching),
            "DEADLINE_OVERDUE" => Some(Self::DeadlineOverdue),
            "WORK_PLAN" => Some(Self::WorkPlan),
            "SCHEDULE" => Some(Self::Schedule),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub user_id: i32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub document_id: Option<i32>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnreadCountDto {
    pub unread: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkedReadDto {
    pub updated: u64,
}
