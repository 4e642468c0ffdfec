//! # sweetshop-core: Pure Business Logic for the Sweet Shop
//!
//! This crate is the **heart** of the sweet shop API. It contains the domain
//! aggregates and every business rule that can be expressed without I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Sweet Shop Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 HTTP Boundary (axum, apps/api)                │  │
//! │  │   /auth/register  /auth/login  /sweets  /sweets/:id/...      │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │        Services (SweetService, AuthService, apps/api)         │  │
//! │  │   validation, stock rules, credential & token issuance        │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │             ★ sweetshop-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐      ┌────────────┐      ┌───────────┐        │  │
//! │  │   │   types   │      │ validation │      │   error   │        │  │
//! │  │   │   Sweet   │      │   rules    │      │ taxonomy  │        │  │
//! │  │   │   User    │      │   checks   │      │           │        │  │
//! │  │   └───────────┘      └────────────┘      └───────────┘        │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │              sweetshop-db (Database Layer)                    │  │
//! │  │         SQLite queries, migrations, repositories              │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain aggregates (Sweet, User) and their input shapes
//! - [`error`] - Domain error taxonomy
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Construction-Time Invariants**: price ≥ 0, quantity ≥ 0, non-empty
//!    name/category are enforced before anything reaches storage
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

pub mod error;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::{NewSweet, Sweet, User};
