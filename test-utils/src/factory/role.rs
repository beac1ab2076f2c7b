//! System role seeding for test databases.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Names of the roles seeded by the schema migration.
pub const SYSTEM_ROLES: [&str; 4] = ["ADMIN", "REGISTRAR", "COMMANDER", "EXECUTOR"];

/// Inserts the four system roles.
///
/// # Returns
/// - `Ok(Vec<entity::role::Model>)` - Inserted roles in `SYSTEM_ROLES` order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_system_roles(db: &DatabaseConnection) -> Result<Vec<entity::role::Model>, DbErr> {
    let mut roles = Vec::with_capacity(SYSTEM_ROLES.len());

    for name in SYSTEM_ROLES {
        let role = entity::role::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(None),
        }
        .insert(db)
        .await?;
        roles.push(role);
    }

    Ok(roles)
}

/// Looks up a seeded role by name.
///
/// # Returns
/// - `Ok(entity::role::Model)` - The role
/// - `Err(DbErr::RecordNotFound)` - Role was not seeded
pub async fn find_role(db: &DatabaseConnection, name: &str) -> Result<entity::role::Model, DbErr> {
    entity::prelude::Role::find()
        .filter(entity::role::Column::Name.eq(name))
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Role {} not seeded", name)))
}
