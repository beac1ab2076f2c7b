//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Enumerated columns are parsed into their typed form here so that services never see
//! raw stored strings.

pub mod department;
pub mod document;
pub mod equipment;
pub mod notification;
pub mod page;
pub mod schedule;
pub mod user;
pub mod work_plan;
