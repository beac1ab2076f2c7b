//! User domain models and parameters.
//!
//! Provides the domain model for application users along with their granted roles, and
//! parameter types for account creation and profile updates.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::user::{CreateUserDto, RoleKind, UpdateUserDto, UserDto},
    server::util::parse::parse_stored,
};

/// User with profile data and granted roles.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login name.
    pub username: String,
    pub full_name: String,
    /// Military rank, if any.
    pub rank: Option<String>,
    pub position: Option<String>,
    /// Department the user serves in.
    pub department_id: Option<i32>,
    /// Deactivated users cannot authenticate.
    pub active: bool,
    pub roles: Vec<RoleKind>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model and its role rows to a user domain model.
    ///
    /// # Arguments
    /// - `entity` - The user entity from the database
    /// - `roles` - Role rows linked to the user through `user_role`
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Type)` - A role row holds an unknown role name
    pub fn from_entity(
        entity: entity::user::Model,
        roles: Vec<entity::role::Model>,
    ) -> Result<Self, DbErr> {
        let mut roles = roles
            .iter()
            .map(|role| parse_stored("role.name", &role.name, RoleKind::parse))
            .collect::<Result<Vec<_>, _>>()?;
        roles.sort_by_key(|role| role.as_str());

        Ok(Self {
            id: entity.id,
            username: entity.username,
            full_name: entity.full_name,
            rank: entity.rank,
            position: entity.position,
            department_id: entity.department_id,
            active: entity.active,
            roles,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn has_role(&self, role: RoleKind) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(RoleKind::Admin)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            full_name: self.full_name,
            rank: self.rank,
            position: self.position,
            department_id: self.department_id,
            active: self.active,
            roles: self.roles,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a user account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub full_name: String,
    pub rank: Option<String>,
    pub position: Option<String>,
    pub department_id: Option<i32>,
    pub roles: Vec<RoleKind>,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            full_name: dto.full_name,
            rank: dto.rank,
            position: dto.position,
            department_id: dto.department_id,
            roles: dto.roles,
        }
    }
}

/// Parameters for updating a user's profile.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub full_name: String,
    pub rank: Option<String>,
    pub position: Option<String>,
    pub department_id: Option<i32>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            rank: dto.rank,
            position: dto.position,
            department_id: dto.department_id,
        }
    }
}
