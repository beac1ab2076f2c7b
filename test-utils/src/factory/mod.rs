//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default
//! creation. Foreign keys are enforced by SQLite, so parents must exist before children.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let department = factory::create_department(&db).await?;
//! let user = factory::create_user(&db, department.id).await?;
//! let document = factory::create_document(&db, department.id, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let registrar = factory::user::UserFactory::new(&db)
//!     .department_id(department.id)
//!     .roles(&["REGISTRAR"])
//!     .build()
//!     .await?;
//!
//! let overdue = factory::document::DocumentFactory::new(&db, department.id, registrar.id)
//!     .status("IN_PROGRESS")
//!     .deadline(Some(Utc::now() - Duration::hours(2)))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `department` - Departments with unique names and codes
//! - `role` - System role seeding and lookup
//! - `user` - Users with optional roles
//! - `document` - Documents of any kind with their detail row
//! - `assignment` - Document to department assignments
//! - `notification` - Notifications for a user
//! - `schedule` - Calendar events
//! - `work_plan` - Department work plans
//! - `equipment` - Inventory items
//! - `helpers` - Unique ids and multi-entity setups

pub mod assignment;
pub mod department;
pub mod document;
pub mod equipment;
pub mod helpers;
pub mod notification;
pub mod role;
pub mod schedule;
pub mod user;
pub mod work_plan;

// Re-export commonly used factory functions for concise usage
pub use assignment::create_assignment;
pub use department::create_department;
pub use document::create_document;
pub use equipment::create_equipment;
pub use notification::create_notification;
pub use schedule::create_schedule;
pub use user::{create_user, create_user_with_roles};
pub use work_plan::create_work_plan;
