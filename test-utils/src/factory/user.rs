//! User factory for creating test user entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::{helpers::next_id, role::find_role};

/// Factory for creating test users with customizable fields.
///
/// Roles are granted by name and must have been seeded (see
/// `TestBuilder::with_user_tables`).
///
/// # Example
///
/// ```rust,ignore
/// let commander = UserFactory::new(&db)
///     .department_id(department.id)
///     .roles(&["COMMANDER"])
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    full_name: String,
    rank: Option<String>,
    department_id: Option<i32>,
    active: bool,
    roles: Vec<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new factory with a unique username, no department and no roles.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            username: format!("user{}", id),
            full_name: format!("Test User {}", id),
            rank: None,
            department_id: None,
            active: true,
            roles: Vec::new(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn rank(mut self, rank: Option<String>) -> Self {
        self.rank = rank;
        self
    }

    pub fn department_id(mut self, department_id: i32) -> Self {
        self.department_id = Some(department_id);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the role names granted to the user.
    pub fn roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Builds and inserts the user and its role links.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        let user = entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.username),
            full_name: ActiveValue::Set(self.full_name),
            rank: ActiveValue::Set(self.rank),
            position: ActiveValue::Set(None),
            department_id: ActiveValue::Set(self.department_id),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        for name in &self.roles {
            let role = find_role(self.db, name).await?;

            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                role_id: ActiveValue::Set(role.id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(user)
    }
}

/// Creates an active user without roles in the given department.
pub async fn create_user(
    db: &DatabaseConnection,
    department_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).department_id(department_id).build().await
}

/// Creates an active user with the given role names in the given department.
pub async fn create_user_with_roles(
    db: &DatabaseConnection,
    department_id: i32,
    roles: &[&str],
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .department_id(department_id)
        .roles(roles)
        .build()
        .await
}
