//! Inventory business rules.
//!
//! Validation always runs before any mutating storage call; storage faults
//! bubble up unchanged. Stock adjustments ride on the repository's atomic
//! conditional updates, so two concurrent purchases can never over-decrement
//! even though the availability *message* comes from a separate read.

use tracing::info;

use crate::error::ApiError;
use sweetshop_core::{validation, CoreError, NewSweet, Sweet};
use sweetshop_db::SweetRepository;

/// Service for inventory operations.
#[derive(Debug, Clone)]
pub struct SweetService {
    repo: SweetRepository,
}

impl SweetService {
    /// Creates a new SweetService over the given repository.
    pub fn new(repo: SweetRepository) -> Self {
        SweetService { repo }
    }

    /// Lists every sweet, ordered by id.
    pub async fn list_all(&self) -> Result<Vec<Sweet>, ApiError> {
        Ok(self.repo.list_all().await?)
    }

    /// Gets a single sweet by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Sweet, ApiError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::SweetNotFound(id).into())
    }

    /// Creates a new sweet after checking the aggregate invariants.
    pub async fn add(&self, fields: NewSweet) -> Result<Sweet, ApiError> {
        fields.validate()?;

        let sweet = self.repo.insert(&fields).await?;
        info!(id = sweet.id, name = %sweet.name, "Sweet created");
        Ok(sweet)
    }

    /// Full update of the four mutable fields.
    ///
    /// Existence is checked first, then the fields are validated, then the
    /// row is replaced. The check and the write are two separate calls; a
    /// concurrent delete in between still surfaces as NotFound because the
    /// replace itself reports the missing row.
    pub async fn update(&self, id: i64, fields: NewSweet) -> Result<Sweet, ApiError> {
        if self.repo.get_by_id(id).await?.is_none() {
            return Err(CoreError::SweetNotFound(id).into());
        }

        fields.validate()?;

        self.repo
            .replace(id, &fields)
            .await?
            .ok_or_else(|| CoreError::SweetNotFound(id).into())
    }

    /// Deletes a sweet.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        if !self.repo.remove(id).await? {
            return Err(CoreError::SweetNotFound(id).into());
        }
        info!(id, "Sweet deleted");
        Ok(())
    }

    /// Exact category match. An unknown category is an empty result, not an
    /// error.
    pub async fn search_by_category(&self, category: &str) -> Result<Vec<Sweet>, ApiError> {
        Ok(self.repo.find_by_category(category).await?)
    }

    /// Case-insensitive substring match on name.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Sweet>, ApiError> {
        Ok(self.repo.find_by_name_contains(fragment).await?)
    }

    /// Inclusive price range search.
    pub async fn search_by_price_range(&self, min: f64, max: f64) -> Result<Vec<Sweet>, ApiError> {
        validation::validate_price_range(min, max)?;
        Ok(self.repo.find_by_price_range(min, max).await?)
    }

    /// Purchases `amount` units: decrements stock, refusing to go negative.
    pub async fn purchase(&self, id: i64, amount: i64) -> Result<Sweet, ApiError> {
        validation::validate_purchase_amount(amount)?;

        let current = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(CoreError::SweetNotFound(id))?;

        if amount > current.quantity {
            return Err(CoreError::InsufficientStock {
                available: current.quantity,
                requested: amount,
            }
            .into());
        }

        match self.repo.deduct_quantity(id, amount).await? {
            Some(sweet) => {
                info!(id, amount, remaining = sweet.quantity, "Purchase completed");
                Ok(sweet)
            }
            // The guard lost a race: stock moved (or the row vanished)
            // between the read above and the conditional decrement.
            None => match self.repo.get_by_id(id).await? {
                Some(fresh) => Err(CoreError::InsufficientStock {
                    available: fresh.quantity,
                    requested: amount,
                }
                .into()),
                None => Err(CoreError::SweetNotFound(id).into()),
            },
        }
    }

    /// Restocks `amount` units; no upper bound.
    pub async fn restock(&self, id: i64, amount: i64) -> Result<Sweet, ApiError> {
        validation::validate_restock_amount(amount)?;

        match self.repo.add_quantity(id, amount).await? {
            Some(sweet) => {
                info!(id, amount, total = sweet.quantity, "Restock completed");
                Ok(sweet)
            }
            None => Err(CoreError::SweetNotFound(id).into()),
        }
    }

    /// Whether at least one unit is on hand.
    pub async fn check_stock(&self, id: i64) -> Result<bool, ApiError> {
        Ok(self.get_by_id(id).await?.in_stock())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sweetshop_db::{Database, DbConfig};

    async fn service() -> SweetService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        SweetService::new(db.sweets())
    }

    fn fields(name: &str, price: f64, quantity: i64) -> NewSweet {
        NewSweet {
            name: name.to_string(),
            category: "candy".to_string(),
            price,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_add_then_get_returns_exact_values() {
        let svc = service().await;

        let created = svc.add(fields("Barfi", 2.25, 12)).await.unwrap();
        assert!(created.id > 0);

        let fetched = svc.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.name, "Barfi");
        assert_eq!(fetched.category, "candy");
        assert_eq!(fetched.price, 2.25);
        assert_eq!(fetched.quantity, 12);
    }

    #[tokio::test]
    async fn test_add_invalid_fields_never_reach_storage() {
        let svc = service().await;

        let err = svc.add(fields("", 1.0, 1)).await.unwrap_err();
        assert_eq!(err.to_string(), "Name is required");

        let err = svc.add(fields("Barfi", -1.0, 1)).await.unwrap_err();
        assert_eq!(err.to_string(), "Price must be a positive number");

        let err = svc.add(fields("Barfi", 1.0, -1)).await.unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be a non-negative number");

        // Nothing was persisted by the rejected calls.
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found_with_id_in_message() {
        let svc = service().await;

        let err = svc.get_by_id(99).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "Sweet with ID 99 not found");
    }

    #[tokio::test]
    async fn test_update_checks_existence_before_validation() {
        let svc = service().await;

        // Missing id wins over invalid fields.
        let err = svc.update(99, fields("", -1.0, -1)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));

        let created = svc.add(fields("Barfi", 2.0, 5)).await.unwrap();

        let err = svc.update(created.id, fields("", 1.0, 1)).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let updated = svc
            .update(created.id, fields("Kaju Barfi", 3.0, 7))
            .await
            .unwrap();
        assert_eq!(updated.name, "Kaju Barfi");
        assert_eq!(updated.quantity, 7);
    }

    #[tokio::test]
    async fn test_delete() {
        let svc = service().await;

        let created = svc.add(fields("Barfi", 2.0, 5)).await.unwrap();
        svc.delete(created.id).await.unwrap();

        let err = svc.delete(created.id).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_price_range_validation() {
        let svc = service().await;

        let err = svc.search_by_price_range(3.0, 2.0).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Minimum price cannot be greater than maximum price"
        );

        let err = svc.search_by_price_range(-1.0, 2.0).await.unwrap_err();
        assert_eq!(err.to_string(), "Prices must be positive numbers");
    }

    #[tokio::test]
    async fn test_price_range_returns_only_items_in_bounds() {
        let svc = service().await;

        svc.add(fields("A", 1.5, 1)).await.unwrap();
        svc.add(fields("B", 2.0, 1)).await.unwrap();
        svc.add(fields("C", 2.75, 1)).await.unwrap();
        svc.add(fields("D", 3.0, 1)).await.unwrap();
        svc.add(fields("E", 3.5, 1)).await.unwrap();

        let found = svc.search_by_price_range(2.0, 3.0).await.unwrap();
        let prices: Vec<f64> = found.iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![2.0, 2.75, 3.0]);
    }

    #[tokio::test]
    async fn test_purchase_happy_path_and_exact_drain() {
        let svc = service().await;
        let created = svc.add(fields("Barfi", 2.0, 10)).await.unwrap();

        let after = svc.purchase(created.id, 4).await.unwrap();
        assert_eq!(after.quantity, 6);

        let after = svc.purchase(created.id, 6).await.unwrap();
        assert_eq!(after.quantity, 0);

        assert!(!svc.check_stock(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_purchase_insufficient_stock_leaves_quantity_unchanged() {
        let svc = service().await;
        let created = svc.add(fields("Barfi", 2.0, 3)).await.unwrap();

        let err = svc.purchase(created.id, 5).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Insufficient stock. Available: 3, Requested: 5"
        );

        assert_eq!(svc.get_by_id(created.id).await.unwrap().quantity, 3);
    }

    #[tokio::test]
    async fn test_purchase_and_restock_reject_non_positive_amounts() {
        let svc = service().await;
        let created = svc.add(fields("Barfi", 2.0, 3)).await.unwrap();

        for amount in [0, -4] {
            let err = svc.purchase(created.id, amount).await.unwrap_err();
            assert_eq!(
                err.to_string(),
                "Purchase quantity must be greater than zero"
            );

            let err = svc.restock(created.id, amount).await.unwrap_err();
            assert_eq!(err.to_string(), "Restock quantity must be greater than zero");
        }

        // Validation fires even for a missing id.
        let err = svc.purchase(999, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_sequential_purchases_are_cumulative() {
        let svc = service().await;
        let created = svc.add(fields("Barfi", 2.0, 100)).await.unwrap();

        svc.purchase(created.id, 10).await.unwrap();
        svc.purchase(created.id, 15).await.unwrap();
        let last = svc.purchase(created.id, 20).await.unwrap();

        assert_eq!(last.quantity, 55);
    }

    #[tokio::test]
    async fn test_restock_has_no_upper_bound() {
        let svc = service().await;
        let created = svc.add(fields("Barfi", 2.0, 1)).await.unwrap();

        let after = svc.restock(created.id, 1_000_000).await.unwrap();
        assert_eq!(after.quantity, 1_000_001);

        let err = svc.restock(999, 5).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_check_stock() {
        let svc = service().await;

        let stocked = svc.add(fields("Barfi", 2.0, 5)).await.unwrap();
        let empty = svc.add(fields("Ladoo", 1.0, 0)).await.unwrap();

        assert!(svc.check_stock(stocked.id).await.unwrap());
        assert!(!svc.check_stock(empty.id).await.unwrap());

        let err = svc.check_stock(999).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_search_passthrough() {
        let svc = service().await;

        svc.add(NewSweet {
            name: "Dark Truffle".to_string(),
            category: "chocolate".to_string(),
            price: 3.0,
            quantity: 5,
        })
        .await
        .unwrap();
        svc.add(fields("Lemon Drop", 0.5, 5)).await.unwrap();

        assert_eq!(svc.search_by_category("chocolate").await.unwrap().len(), 1);
        assert_eq!(svc.search_by_name("truffle").await.unwrap().len(), 1);
        // Unknown category is an empty sequence, not an error.
        assert!(svc.search_by_category("pastry").await.unwrap().is_empty());
    }
}
