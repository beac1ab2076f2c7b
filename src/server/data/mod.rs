//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! `DocumentRepository` is generic over `ConnectionTrait` so that workflow actions can run
//! it inside a database transaction.

pub mod department;
pub mod document;
pub mod equipment;
pub mod notification;
pub mod schedule;
pub mod user;
pub mod work_plan;

#[cfg(test)]
mod test;
