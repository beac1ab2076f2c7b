//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection is
//! a pool, the token service holds only its key material and the notification hub
//! wraps a broadcast sender.

use sea_orm::DatabaseConnection;

use crate::server::service::{notification::hub::NotificationHub, token::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Live fan-out of new notifications to server-sent event streams.
    pub notifications: NotificationHub,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService, notifications: NotificationHub) -> Self {
        Self {
            db,
            tokens,
            notifications,
        }
    }
}
