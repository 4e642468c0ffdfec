//! HTTP route handlers.
//!
//! Thin request/response mapping: parse the typed input, call the service,
//! wrap the result in the uniform `{success, ...}` envelope. All business
//! rules live in the services.

pub mod auth;
pub mod sweets;
