//! In-memory [`RecordStore`] used by tests and by any caller that wants
//! the full API surface without a database on disk.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use db::models::{product::Product, upcoming_product::UpcomingProduct};
use uuid::Uuid;

use super::inventory::{InventoryError, RecordStore};

#[derive(Default)]
pub struct InMemoryRecordStore {
    products: Mutex<Vec<Product>>,
    upcoming_products: Mutex<Vec<UpcomingProduct>>,
}

impl InMemoryRecordStore {
    fn lock_products(&self) -> std::sync::MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_upcoming(&self) -> std::sync::MutexGuard<'_, Vec<UpcomingProduct>> {
        self.upcoming_products
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn list_products(&self) -> Result<Vec<Product>, InventoryError> {
        Ok(self.lock_products().clone())
    }

    async fn insert_product(&self, name: &str) -> Result<Product, InventoryError> {
        let product = Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.lock_products().push(product.clone());
        Ok(product)
    }

    async fn patch_product(&self, id: Uuid, name: &str) -> Result<Product, InventoryError> {
        let mut products = self.lock_products();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(InventoryError::NotFound)?;
        product.name = name.to_string();
        Ok(product.clone())
    }

    async fn delete_product(&self, id: Uuid) -> Result<(), InventoryError> {
        self.lock_products().retain(|p| p.id != id);
        Ok(())
    }

    async fn list_upcoming_products(&self) -> Result<Vec<UpcomingProduct>, InventoryError> {
        Ok(self.lock_upcoming().clone())
    }

    async fn insert_upcoming_product(
        &self,
        name: &str,
        expected_date: DateTime<Utc>,
    ) -> Result<UpcomingProduct, InventoryError> {
        let product = UpcomingProduct {
            id: Uuid::new_v4(),
            name: name.to_string(),
            expected_date,
            created_at: Utc::now(),
        };
        self.lock_upcoming().push(product.clone());
        Ok(product)
    }

    async fn patch_upcoming_product(
        &self,
        id: Uuid,
        name: &str,
        expected_date: DateTime<Utc>,
    ) -> Result<UpcomingProduct, InventoryError> {
        let mut products = self.lock_upcoming();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(InventoryError::NotFound)?;
        product.name = name.to_string();
        product.expected_date = expected_date;
        Ok(product.clone())
    }

    async fn delete_upcoming_product(&self, id: Uuid) -> Result<(), InventoryError> {
        self.lock_upcoming().retain(|p| p.id != id);
        Ok(())
    }
}
