use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// A product currently available for sale
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, TS)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateProduct {
    pub name: String,
}

/// Request body for editing a product. Every edit resubmits all editable
/// fields; `id` and `created_at` are never writable.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateProduct {
    pub name: String,
}

impl Product {
    /// Full snapshot of the collection in insertion order.
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, name, created_at
            FROM products
            ORDER BY created_at ASC, id ASC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, name, created_at
            FROM products
            WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, name: &str) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO products (id, name)
            VALUES ($1, $2)
            RETURNING id, name, created_at"#,
        )
        .bind(id)
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Replaces the editable fields in place. Returns `None` when `id`
    /// does not reference an existing row.
    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        name: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE products
            SET name = $2
            WHERE id = $1
            RETURNING id, name, created_at"#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
