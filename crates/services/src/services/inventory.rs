//! Validated CRUD boundary between the presentation surface and the
//! record store.
//!
//! All argument validation lives here; the store implementations behind
//! [`RecordStore`] forward fields unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use db::{
    DBService,
    models::{
        product::{CreateProduct, Product, UpdateProduct},
        upcoming_product::{CreateUpcomingProduct, UpcomingProduct, UpdateUpcomingProduct},
    },
};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("{0}")]
    Validation(String),
    #[error("record not found")]
    NotFound,
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Raw store boundary: insert/patch/delete/list per collection.
///
/// `patch_*` fails with [`InventoryError::NotFound`] when the id does not
/// reference an existing row; `delete_*` of a missing id is a no-op
/// success. Listing returns a full snapshot in insertion order.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, InventoryError>;
    async fn insert_product(&self, name: &str) -> Result<Product, InventoryError>;
    async fn patch_product(&self, id: Uuid, name: &str) -> Result<Product, InventoryError>;
    async fn delete_product(&self, id: Uuid) -> Result<(), InventoryError>;

    async fn list_upcoming_products(&self) -> Result<Vec<UpcomingProduct>, InventoryError>;
    async fn insert_upcoming_product(
        &self,
        name: &str,
        expected_date: DateTime<Utc>,
    ) -> Result<UpcomingProduct, InventoryError>;
    async fn patch_upcoming_product(
        &self,
        id: Uuid,
        name: &str,
        expected_date: DateTime<Utc>,
    ) -> Result<UpcomingProduct, InventoryError>;
    async fn delete_upcoming_product(&self, id: Uuid) -> Result<(), InventoryError>;
}

/// [`RecordStore`] backed by the SQLite database.
pub struct SqliteRecordStore {
    db: DBService,
}

impl SqliteRecordStore {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn list_products(&self) -> Result<Vec<Product>, InventoryError> {
        Ok(Product::find_all(&self.db.pool).await?)
    }

    async fn insert_product(&self, name: &str) -> Result<Product, InventoryError> {
        Ok(Product::create(&self.db.pool, name).await?)
    }

    async fn patch_product(&self, id: Uuid, name: &str) -> Result<Product, InventoryError> {
        Product::update(&self.db.pool, id, name)
            .await?
            .ok_or(InventoryError::NotFound)
    }

    async fn delete_product(&self, id: Uuid) -> Result<(), InventoryError> {
        Product::delete(&self.db.pool, id).await?;
        Ok(())
    }

    async fn list_upcoming_products(&self) -> Result<Vec<UpcomingProduct>, InventoryError> {
        Ok(UpcomingProduct::find_all(&self.db.pool).await?)
    }

    async fn insert_upcoming_product(
        &self,
        name: &str,
        expected_date: DateTime<Utc>,
    ) -> Result<UpcomingProduct, InventoryError> {
        Ok(UpcomingProduct::create(&self.db.pool, name, expected_date).await?)
    }

    async fn patch_upcoming_product(
        &self,
        id: Uuid,
        name: &str,
        expected_date: DateTime<Utc>,
    ) -> Result<UpcomingProduct, InventoryError> {
        UpcomingProduct::update(&self.db.pool, id, name, expected_date)
            .await?
            .ok_or(InventoryError::NotFound)
    }

    async fn delete_upcoming_product(&self, id: Uuid) -> Result<(), InventoryError> {
        UpcomingProduct::delete(&self.db.pool, id).await?;
        Ok(())
    }
}

/// The inventory access layer. Validates every argument before anything
/// reaches the store and translates store failures into [`InventoryError`].
#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn RecordStore>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn sqlite(db: DBService) -> Self {
        Self::new(Arc::new(SqliteRecordStore::new(db)))
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, InventoryError> {
        self.store.list_products().await
    }

    pub async fn add_product(&self, data: CreateProduct) -> Result<Product, InventoryError> {
        let name = validate_name(&data.name)?;
        let product = self.store.insert_product(&name).await?;
        info!(product_id = %product.id, "product added");
        Ok(product)
    }

    pub async fn edit_product(
        &self,
        id: Uuid,
        data: UpdateProduct,
    ) -> Result<Product, InventoryError> {
        let name = validate_name(&data.name)?;
        let product = self.store.patch_product(id, &name).await?;
        info!(product_id = %id, "product updated");
        Ok(product)
    }

    pub async fn remove_product(&self, id: Uuid) -> Result<(), InventoryError> {
        self.store.delete_product(id).await?;
        info!(product_id = %id, "product removed");
        Ok(())
    }

    pub async fn list_upcoming_products(&self) -> Result<Vec<UpcomingProduct>, InventoryError> {
        self.store.list_upcoming_products().await
    }

    pub async fn add_upcoming_product(
        &self,
        data: CreateUpcomingProduct,
    ) -> Result<UpcomingProduct, InventoryError> {
        let name = validate_name(&data.name)?;
        let expected_date = validate_expected_date(data.expected_date)?;
        let product = self
            .store
            .insert_upcoming_product(&name, expected_date)
            .await?;
        info!(product_id = %product.id, expected_date = %expected_date, "upcoming product added");
        Ok(product)
    }

    pub async fn edit_upcoming_product(
        &self,
        id: Uuid,
        data: UpdateUpcomingProduct,
    ) -> Result<UpcomingProduct, InventoryError> {
        let name = validate_name(&data.name)?;
        let expected_date = validate_expected_date(data.expected_date)?;
        let product = self
            .store
            .patch_upcoming_product(id, &name, expected_date)
            .await?;
        info!(product_id = %id, "upcoming product updated");
        Ok(product)
    }

    pub async fn remove_upcoming_product(&self, id: Uuid) -> Result<(), InventoryError> {
        self.store.delete_upcoming_product(id).await?;
        info!(product_id = %id, "upcoming product removed");
        Ok(())
    }
}

/// The stored name is the trimmed name.
fn validate_name(raw: &str) -> Result<String, InventoryError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(InventoryError::Validation(
            "Product name is required".to_string(),
        ));
    }
    if name.chars().count() < 2 {
        return Err(InventoryError::Validation(
            "Product name must be at least 2 characters".to_string(),
        ));
    }
    Ok(name.to_string())
}

fn validate_expected_date(expected: DateTime<Utc>) -> Result<DateTime<Utc>, InventoryError> {
    if expected < Utc::now() {
        return Err(InventoryError::Validation(
            "Arrival date must be in the future".to_string(),
        ));
    }
    Ok(expected)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::services::memory::InMemoryRecordStore;

    fn service() -> InventoryService {
        InventoryService::new(Arc::new(InMemoryRecordStore::default()))
    }

    fn future_date() -> DateTime<Utc> {
        Utc::now() + Duration::days(30)
    }

    #[tokio::test]
    async fn add_product_rejects_empty_name_without_mutating() {
        let svc = service();
        let err = svc
            .add_product(CreateProduct {
                name: "   ".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
        assert!(svc.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_product_rejects_single_character_name() {
        let svc = service();
        let err = svc
            .add_product(CreateProduct {
                name: " W ".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[tokio::test]
    async fn added_product_appears_in_list_exactly_once() {
        let svc = service();
        let created = svc
            .add_product(CreateProduct {
                name: "Widget".to_string(),
            })
            .await
            .unwrap();

        let listed = svc.list_products().await.unwrap();
        let matching: Vec<_> = listed.iter().filter(|p| p.id == created.id).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].name, "Widget");
    }

    #[tokio::test]
    async fn add_product_stores_trimmed_name() {
        let svc = service();
        let created = svc
            .add_product(CreateProduct {
                name: "  Smart Watch  ".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.name, "Smart Watch");
    }

    #[tokio::test]
    async fn edit_missing_product_is_not_found_and_leaves_collection_unchanged() {
        let svc = service();
        svc.add_product(CreateProduct {
            name: "Widget".to_string(),
        })
        .await
        .unwrap();
        let before = svc.list_products().await.unwrap();

        let err = svc
            .edit_product(
                Uuid::new_v4(),
                UpdateProduct {
                    name: "Gadget".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::NotFound));
        assert_eq!(svc.list_products().await.unwrap(), before);
    }

    #[tokio::test]
    async fn edit_replaces_name_but_keeps_id_and_creation_time() {
        let svc = service();
        let created = svc
            .add_product(CreateProduct {
                name: "Widget".to_string(),
            })
            .await
            .unwrap();

        let updated = svc
            .edit_product(
                created.id,
                UpdateProduct {
                    name: "Widget Pro".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Widget Pro");

        let listed = svc.list_products().await.unwrap();
        assert_eq!(listed, vec![updated]);
    }

    #[tokio::test]
    async fn removed_product_never_appears_in_list() {
        let svc = service();
        let created = svc
            .add_product(CreateProduct {
                name: "Widget".to_string(),
            })
            .await
            .unwrap();

        svc.remove_product(created.id).await.unwrap();
        assert!(svc.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_of_missing_id_is_a_noop_success() {
        let svc = service();
        svc.remove_product(Uuid::new_v4()).await.unwrap();
        svc.remove_upcoming_product(Uuid::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn add_upcoming_product_rejects_past_date_without_mutating() {
        let svc = service();
        let err = svc
            .add_upcoming_product(CreateUpcomingProduct {
                name: "Gadget".to_string(),
                expected_date: Utc::now() - Duration::days(1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
        assert!(svc.list_upcoming_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn edit_upcoming_product_rejects_past_date() {
        let svc = service();
        let created = svc
            .add_upcoming_product(CreateUpcomingProduct {
                name: "Gadget".to_string(),
                expected_date: future_date(),
            })
            .await
            .unwrap();

        let err = svc
            .edit_upcoming_product(
                created.id,
                UpdateUpcomingProduct {
                    name: "Gadget".to_string(),
                    expected_date: Utc::now() - Duration::days(1),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));

        let listed = svc.list_upcoming_products().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn edit_upcoming_product_replaces_both_editable_fields() {
        let svc = service();
        let created = svc
            .add_upcoming_product(CreateUpcomingProduct {
                name: "Gaming Laptop".to_string(),
                expected_date: future_date(),
            })
            .await
            .unwrap();

        let new_date = future_date() + Duration::days(10);
        let updated = svc
            .edit_upcoming_product(
                created.id,
                UpdateUpcomingProduct {
                    name: "Gaming Laptop Pro".to_string(),
                    expected_date: new_date,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Gaming Laptop Pro");
        assert_eq!(updated.expected_date, new_date);
    }

    #[tokio::test]
    async fn upcoming_products_sort_chronologically_regardless_of_insertion_order() {
        let svc = service();
        let t1 = future_date();
        let t2 = t1 + Duration::days(5);

        // Inserted in reverse chronological order.
        let later = svc
            .add_upcoming_product(CreateUpcomingProduct {
                name: "4K Monitor".to_string(),
                expected_date: t2,
            })
            .await
            .unwrap();
        let sooner = svc
            .add_upcoming_product(CreateUpcomingProduct {
                name: "Wireless Mouse".to_string(),
                expected_date: t1,
            })
            .await
            .unwrap();

        let mut listed = svc.list_upcoming_products().await.unwrap();
        listed.sort_by_key(|p| p.expected_date);
        assert_eq!(listed, vec![sooner, later]);
    }
}
