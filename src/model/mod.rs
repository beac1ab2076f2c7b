//! API data transfer objects and the enumerations shared by every layer.
//!
//! Types here are serialized to and from JSON at the HTTP boundary and carry no
//! database concerns. Enumerations expose `as_str`/`parse` for the string columns
//! they are stored in.

pub mod api;
pub mod department;
pub mod document;
pub mod equipment;
pub mod notification;
pub mod schedule;
pub mod user;
pub mod work_plan;
