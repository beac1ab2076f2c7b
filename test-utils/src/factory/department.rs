//! Department factory for creating test department entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test departments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let platoon = DepartmentFactory::new(&db)
///     .name("1st Platoon")
///     .parent_id(Some(company.id))
///     .build()
///     .await?;
/// ```
pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
    parent_id: Option<i32>,
    description: Option<String>,
}

impl<'a> DepartmentFactory<'a> {
    /// Creates a new factory with a unique name and code.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            name: format!("Department {}", id),
            code: format!("DEP-{}", id),
            parent_id: None,
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn parent_id(mut self, parent_id: Option<i32>) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the department entity into the database.
    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        let now = Utc::now();

        entity::department::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            parent_id: ActiveValue::Set(self.parent_id),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a department with default values.
pub async fn create_department(db: &DatabaseConnection) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db).build().await
}
