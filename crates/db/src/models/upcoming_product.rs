use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// A product announced but not yet in stock. Independent of `Product`;
/// there are no cross-references between the two collections.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, TS)]
pub struct UpcomingProduct {
    pub id: Uuid,
    pub name: String,
    pub expected_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating an upcoming product
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateUpcomingProduct {
    pub name: String,
    pub expected_date: DateTime<Utc>,
}

/// Request body for editing an upcoming product. Every edit resubmits
/// all editable fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateUpcomingProduct {
    pub name: String,
    pub expected_date: DateTime<Utc>,
}

impl UpcomingProduct {
    /// Full snapshot in insertion order. The store imposes no chronological
    /// ordering; callers that need `expected_date` order sort explicitly.
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, name, expected_date, created_at
            FROM upcoming_products
            ORDER BY created_at ASC, id ASC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, name, expected_date, created_at
            FROM upcoming_products
            WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        name: &str,
        expected_date: DateTime<Utc>,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO upcoming_products (id, name, expected_date)
            VALUES ($1, $2, $3)
            RETURNING id, name, expected_date, created_at"#,
        )
        .bind(id)
        .bind(name)
        .bind(expected_date)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        name: &str,
        expected_date: DateTime<Utc>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE upcoming_products
            SET name = $2, expected_date = $3
            WHERE id = $1
            RETURNING id, name, expected_date, created_at"#,
        )
        .bind(id)
        .bind(name)
        .bind(expected_date)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM upcoming_products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
