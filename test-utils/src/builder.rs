use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError, factory};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// Tables are created straight from the entity definitions, so the seed rows inserted by
/// migrations do not exist. Builders that include the `role` table seed the four system
/// roles after the tables are created.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Department, Equipment};
///
/// let test = TestBuilder::new()
///     .with_table(Department)
///     .with_table(Equipment)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Whether to insert the system roles after creating tables.
    seed_roles: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            seed_roles: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference), since SQLite enforces foreign keys.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the organizational tables and seeds the system roles.
    ///
    /// Tables: Department, User, Role, UserRole.
    pub fn with_user_tables(mut self) -> Self {
        self.seed_roles = true;
        self.with_table(Department)
            .with_table(User)
            .with_table(Role)
            .with_table(UserRole)
    }

    /// Adds everything needed for document workflow tests.
    ///
    /// Includes the user tables plus Document, its three detail tables,
    /// DocumentAssignment, DocumentHistory and Notification.
    pub fn with_document_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Document)
            .with_table(IncomingDocument)
            .with_table(OutgoingDocument)
            .with_table(InternalDocument)
            .with_table(DocumentAssignment)
            .with_table(DocumentHistory)
            .with_table(Notification)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_document_tables()
            .with_table(Schedule)
            .with_table(WorkPlan)
            .with_table(Equipment)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect, create tables, or seed roles
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        if self.seed_roles {
            let db = setup.database().await?;
            factory::role::create_system_roles(db).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
