//! HTTP request handlers.
//!
//! Each handler authenticates the caller through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! converts the request DTO into service parameters, calls the service and converts the
//! domain result back into a DTO.

pub mod department;
pub mod document;
pub mod equipment;
pub mod notification;
pub mod schedule;
pub mod user;
pub mod work_plan;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{error::AppError, util::pagination::check_window};

/// Upper bound for `entries` on every list endpoint.
pub const MAX_ENTRIES: u64 = 100;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Zero-indexed page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10, max: 100)
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParams {
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }

    /// The requested page, or `BadRequest` when its rows lie past the largest offset a
    /// query can reach.
    pub fn checked_page(&self) -> Result<u64, AppError> {
        check_window(self.page, self.per_page())?;

        Ok(self.page)
    }
}

fn default_entries() -> u64 {
    10
}

#[cfg(test)]
mod test;
