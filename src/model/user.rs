use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// System role granted to a user. Stored by name in the `role` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleKind {
    Admin,
    Registrar,
    Commander,
    Executor,
}

impl RoleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Registrar => "REGISTRAR",
            Self::Commander => "COMMANDER",
            Self::Executor => "EXECUTOR",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "REGISTRAR" => Some(Self::Registrar),
            "COMMANDER" => Some(Self::Commander),
            "EXECUTOR" => Some(Self::Executor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub rank: Option<String>,
    pub position: Option<String>,
    pub department_id: Option<i32>,
    pub active: bool,
    pub roles: Vec<RoleKind>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub full_name: String,
    pub rank: Option<String>,
    pub position: Option<String>,
    pub department_id: Option<i32>,
    #[serde(default)]
    pub roles: Vec<RoleKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub full_name: String,
    pub rank: Option<String>,
    pub position: Option<String>,
    pub department_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetRolesDto {
    pub roles: Vec<RoleKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetActiveDto {
    pub active: bool,
}

/// Bearer token issued for a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
