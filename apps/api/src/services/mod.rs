//! Business-rule services.
//!
//! Stateless orchestrators: validate first, then talk to the repositories.
//! Every operation re-fetches what it needs; no long-lived state is held
//! between calls.

pub mod auth_service;
pub mod sweet_service;

pub use auth_service::{AuthService, AuthSession};
pub use sweet_service::SweetService;
