//! SeaORM entity definitions for the chancery schema.
//!
//! Enumerated columns (document kind, status, equipment category, ...) are stored as
//! strings and converted to typed enums at the repository boundary.

pub mod prelude;

pub mod department;
pub mod document;
pub mod document_assignment;
pub mod document_history;
pub mod equipment;
pub mod incoming_document;
pub mod internal_document;
pub mod notification;
pub mod outgoing_document;
pub mod role;
pub mod schedule;
pub mod user;
pub mod user_role;
pub mod work_plan;
