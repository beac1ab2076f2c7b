//! Request authentication guards.

pub mod auth;
