//! HTTP request handlers.
//!
//! Controllers build the services a request needs from the application state, call
//! them, and convert the resulting domain models into DTOs.

pub mod admin;
pub mod player;
