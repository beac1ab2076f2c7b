//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, access scopes and the document workflow rules
//! - **Orchestration**: Coordinating repositories and fanning out notifications
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Workflow actions commit status and history together

pub mod department;
pub mod document;
pub mod equipment;
pub mod notification;
pub mod schedule;
pub mod token;
pub mod user;
pub mod work_plan;
pub mod workflow;

#[cfg(test)]
mod test;
