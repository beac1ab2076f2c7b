//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records and their role
//! links. Users are always returned with their roles loaded, converted to the `User`
//! domain model at the repository boundary. The repository is generic over
//! `ConnectionTrait` so role changes and the last-admin check can share a transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::user::RoleKind,
    server::model::user::{CreateUserParams, UpdateUserParams, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a user and links the requested roles.
    ///
    /// # Arguments
    /// - `params` - Profile fields and initial roles
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with roles
    /// - `Err(DbErr)` - Database error, including a unique violation on username
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            full_name: ActiveValue::Set(params.full_name),
            rank: ActiveValue::Set(params.rank),
            position: ActiveValue::Set(params.position),
            department_id: ActiveValue::Set(params.department_id),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.set_roles(entity.id, &params.roles).await?;

        let roles = self.roles_for(&[entity.id]).await?.remove(&entity.id);

        User::from_entity(entity, roles.unwrap_or_default())
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with roles
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let roles = self.roles_for(&[entity.id]).await?.remove(&entity.id);

        User::from_entity(entity, roles.unwrap_or_default()).map(Some)
    }

    /// Finds a user by username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let roles = self.roles_for(&[entity.id]).await?.remove(&entity.id);

        User::from_entity(entity, roles.unwrap_or_default()).map(Some)
    }

    /// Gets paginated users ordered by full name, optionally limited to one department.
    ///
    /// # Arguments
    /// - `department_id` - Only return members of this department when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        department_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find();
        if let Some(department_id) = department_id {
            query = query.filter(entity::user::Column::DepartmentId.eq(department_id));
        }

        let paginator = query
            .order_by_asc(entity::user::Column::FullName)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let ids: Vec<i32> = entities.iter().map(|u| u.id).collect();
        let mut roles = self.roles_for(&ids).await?;

        let users = entities
            .into_iter()
            .map(|entity| {
                let user_roles = roles.remove(&entity.id).unwrap_or_default();
                User::from_entity(entity, user_roles)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Updates profile fields of a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user with roles
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, DbErr> {
        let entity = self.find_entity(id).await?;

        let mut active_model: entity::user::ActiveModel = entity.into();
        active_model.full_name = ActiveValue::Set(params.full_name);
        active_model.rank = ActiveValue::Set(params.rank);
        active_model.position = ActiveValue::Set(params.position);
        active_model.department_id = ActiveValue::Set(params.department_id);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;
        let roles = self.roles_for(&[entity.id]).await?.remove(&entity.id);

        User::from_entity(entity, roles.unwrap_or_default())
    }

    /// Replaces the set of roles granted to a user.
    ///
    /// Removes all existing role links and inserts one link per distinct role.
    ///
    /// # Returns
    /// - `Ok(())` - Roles replaced
    /// - `Err(DbErr::RecordNotFound)` - A role has not been seeded
    pub async fn set_roles(&self, user_id: i32, roles: &[RoleKind]) -> Result<(), DbErr> {
        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        let mut names: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
        names.sort_unstable();
        names.dedup();

        for name in names {
            let role = entity::prelude::Role::find()
                .filter(entity::role::Column::Name.eq(name))
                .one(self.db)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound(format!("Role {} not found", name)))?;

            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                role_id: ActiveValue::Set(role.id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Activates or deactivates a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user with roles
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    pub async fn set_active(&self, id: i32, active: bool) -> Result<User, DbErr> {
        let entity = self.find_entity(id).await?;

        let mut active_model: entity::user::ActiveModel = entity.into();
        active_model.active = ActiveValue::Set(active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;
        let roles = self.roles_for(&[entity.id]).await?.remove(&entity.id);

        User::from_entity(entity, roles.unwrap_or_default())
    }

    /// Counts active users holding the ADMIN role.
    pub async fn count_active_admins(&self) -> Result<u64, DbErr> {
        let admin_ids: Vec<i32> = self.user_ids_with_role(RoleKind::Admin).await?;
        if admin_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(admin_ids))
            .filter(entity::user::Column::Active.eq(true))
            .count(self.db)
            .await
    }

    /// Gets IDs of active users belonging to any of the given departments.
    pub async fn get_active_ids_by_departments(
        &self,
        department_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if department_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::DepartmentId.is_in(department_ids.to_vec()))
            .filter(entity::user::Column::Active.eq(true))
            .order_by_asc(entity::user::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    async fn find_entity(&self, id: i32) -> Result<entity::user::Model, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User with id {} not found", id)))
    }

    async fn user_ids_with_role(&self, role: RoleKind) -> Result<Vec<i32>, DbErr> {
        let links = entity::prelude::UserRole::find()
            .find_also_related(entity::prelude::Role)
            .filter(entity::role::Column::Name.eq(role.as_str()))
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|(link, _)| link.user_id).collect())
    }

    /// Loads role rows for a batch of users in one query.
    async fn roles_for(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::role::Model>>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.is_in(user_ids.to_vec()))
            .find_also_related(entity::prelude::Role)
            .all(self.db)
            .await?;

        let mut roles: HashMap<i32, Vec<entity::role::Model>> = HashMap::new();
        for (link, role) in links {
            if let Some(role) = role {
                roles.entry(link.user_id).or_default().push(role);
            }
        }

        Ok(roles)
    }
}
