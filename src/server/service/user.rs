use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::user::RoleKind,
    server::{
        data::{department::DepartmentRepository, user::UserRepository},
        error::AppError,
        model::{
            page::Page,
            user::{CreateUserParams, UpdateUserParams, User},
        },
        util::pagination::check_window,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user with the requested roles.
    ///
    /// The user row and its role links are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Blank username or unknown department
    /// - `Err(AppError::DbErr)` - Username already taken (409)
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        if params.username.trim().is_empty() {
            return Err(AppError::BadRequest("Username is required".to_string()));
        }
        self.validate_department(params.department_id).await?;

        let txn = self.db.begin().await?;
        let user = UserRepository::new(&txn).create(params).await?;
        txn.commit().await?;
        tracing::info!("Created user {} ({})", user.username, user.id);

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(
        &self,
        department_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<User>, AppError> {
        check_window(page, per_page)?;

        let (items, total) = UserRepository::new(self.db)
            .get_paginated(department_id, page, per_page)
            .await?;

        Ok(Page::new(items, total, page, per_page))
    }

    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        self.get_by_id(id).await?;
        self.validate_department(params.department_id).await?;

        Ok(UserRepository::new(self.db).update(id, params).await?)
    }

    /// Replaces a user's roles.
    ///
    /// The last-admin check and the new role links run in one transaction.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new roles
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::Conflict)` - Would strip ADMIN from the last active admin
    pub async fn set_roles(&self, id: i32, roles: Vec<RoleKind>) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        let user = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
        if user.active && user.is_admin() && !roles.contains(&RoleKind::Admin) {
            ensure_not_last_admin(&repo).await?;
        }

        repo.set_roles(id, &roles).await?;
        let user = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        txn.commit().await?;
        tracing::info!("Set roles of user {} to {:?}", id, roles);

        Ok(user)
    }

    /// Activates or deactivates a user.
    ///
    /// The last-admin check and the update run in one transaction.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::Conflict)` - Would deactivate the last active admin
    pub async fn set_active(&self, id: i32, active: bool) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        let user = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
        if !active && user.active && user.is_admin() {
            ensure_not_last_admin(&repo).await?;
        }

        let user = repo.set_active(id, active).await?;

        txn.commit().await?;
        tracing::info!("Set user {} active={}", id, active);

        Ok(user)
    }

    async fn validate_department(&self, department_id: Option<i32>) -> Result<(), AppError> {
        if let Some(department_id) = department_id {
            if !DepartmentRepository::new(self.db).exists(department_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Department {} does not exist",
                    department_id
                )));
            }
        }

        Ok(())
    }
}

async fn ensure_not_last_admin<C: ConnectionTrait>(
    repo: &UserRepository<'_, C>,
) -> Result<(), AppError> {
    if repo.count_active_admins().await? <= 1 {
        return Err(AppError::Conflict(
            "The last active administrator cannot be removed".to_string(),
        ));
    }

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}
