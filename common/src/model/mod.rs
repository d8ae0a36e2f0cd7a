//! Serde models for every record the API serves.
//!
//! These structs are the wire contract: the backend serializes them out of
//! SQLite rows and the frontend deserializes them from the JSON responses.
//! Field renames (`_id`, `createdAt`, `fullName`, ...) preserve the JSON
//! shapes the admin dashboard and public pages were written against.

pub mod alumni;
pub mod blog;
pub mod event;
pub mod gallery;
pub mod message;
pub mod project;
pub mod registration;
