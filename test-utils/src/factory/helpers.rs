//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in generating unique
/// names, codes and inventory numbers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a department with an active member holding the given roles.
///
/// # Arguments
/// - `db` - Database connection
/// - `roles` - Role names granted to the member, e.g. `&["REGISTRAR"]`
///
/// # Returns
/// - `Ok((department, user))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_department_with_member(
    db: &DatabaseConnection,
    roles: &[&str],
) -> Result<(entity::department::Model, entity::user::Model), DbErr> {
    let department = crate::factory::department::create_department(db).await?;
    let user = crate::factory::user::UserFactory::new(db)
        .department_id(department.id)
        .roles(roles)
        .build()
        .await?;

    Ok((department, user))
}
