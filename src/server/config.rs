use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 12;
const DEFAULT_BOOTSTRAP_ADMIN_USERNAME: &str = "admin";
const DEFAULT_REMINDER_CRON: &str = "0 */15 * * * *";
const DEFAULT_DEADLINE_REMINDER_HOURS: i64 = 24;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    /// Username of the administrator created when the database has none.
    pub bootstrap_admin_username: String,

    /// Cron expression (with seconds) for the deadline reminder job.
    pub reminder_cron: String,
    /// How far ahead of a deadline the approaching reminder fires.
    pub deadline_reminder_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS.to_string())?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiry_hours: optional("JWT_EXPIRY_HOURS", DEFAULT_JWT_EXPIRY_HOURS)?,
            bootstrap_admin_username: optional(
                "BOOTSTRAP_ADMIN_USERNAME",
                DEFAULT_BOOTSTRAP_ADMIN_USERNAME.to_string(),
            )?,
            reminder_cron: optional("REMINDER_CRON", DEFAULT_REMINDER_CRON.to_string())?,
            deadline_reminder_hours: optional(
                "DEADLINE_REMINDER_HOURS",
                DEFAULT_DEADLINE_REMINDER_HOURS,
            )?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
