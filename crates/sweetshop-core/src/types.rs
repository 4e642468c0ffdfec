//! # Domain Types
//!
//! Core domain aggregates for the sweet shop.
//!
//! ## Identity
//! Both aggregates use an integer `id` assigned by storage on insert and
//! immutable thereafter. Services never invent ids.
//!
//! ## Serialization
//! Aggregates serialize camelCase for the JSON API (`createdAt`, `updatedAt`).
//! `User::password_hash` is never serialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation;

// =============================================================================
// Sweet
// =============================================================================

/// A sweet in the shop inventory.
///
/// ## Invariants
/// - `name` and `category` are non-empty
/// - `price >= 0`, `quantity >= 0`
///
/// Enforced at construction time via [`NewSweet::validate`] before any row is
/// written; the schema carries matching CHECK constraints as a backstop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sweet {
    /// Storage-assigned identifier, immutable after creation.
    pub id: i64,
    pub name: String,
    /// Free-form category text (chocolate, candy, pastry, ...). Any non-empty
    /// value is accepted; no enumeration is enforced.
    pub category: String,
    /// Price in currency units.
    pub price: f64,
    /// Units on hand.
    pub quantity: i64,
    /// Fixed at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
}

impl Sweet {
    /// Whether at least one unit is on hand.
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// The four mutable fields of a sweet, as supplied by create and full-update
/// requests. Carries the construction-time invariant checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSweet {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
}

impl NewSweet {
    /// Checks the aggregate invariants: non-empty name and category,
    /// non-negative finite price, non-negative quantity.
    ///
    /// Fails fast on the first violation, in field order: name, category,
    /// price, quantity. Must pass before any storage call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_name(&self.name)?;
        validation::validate_category(&self.category)?;
        validation::validate_price(self.price)?;
        validation::validate_quantity(self.quantity)?;
        Ok(())
    }
}

// =============================================================================
// User
// =============================================================================

/// An account holder.
///
/// Created once via registration; read-only afterwards. The password hash is
/// opaque to the core (hashing lives behind the credential collaborator) and
/// is skipped on serialization so it can never leak through a response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Storage-assigned identifier.
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
