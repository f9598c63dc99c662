use crate::domain::{
    models::property::{NewProperty, PropertyWithOwner},
    ports::PropertyRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

pub struct SqlitePropertyRepo {
    pool: SqlitePool,
}

impl SqlitePropertyRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for SqlitePropertyRepo {
    async fn create(&self, property: &NewProperty) -> Result<i64, AppError> {
        let now = Utc::now();
        let row = sqlx::query(
            "INSERT INTO properties (name, address, type, bedrooms, bathrooms, max_guests, price_per_night, owner_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&property.name)
        .bind(&property.address)
        .bind(&property.property_type)
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(property.max_guests)
        .bind(property.price_per_night)
        .bind(property.owner_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("id"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PropertyWithOwner>, AppError> {
        sqlx::query_as::<_, PropertyWithOwner>(
            "SELECT p.*, u.name as owner_name
             FROM properties p
             LEFT JOIN users u ON p.owner_id = u.id
             WHERE p.id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<PropertyWithOwner>, AppError> {
        sqlx::query_as::<_, PropertyWithOwner>(
            "SELECT p.*, u.name as owner_name
             FROM properties p
             LEFT JOIN users u ON p.owner_id = u.id
             ORDER BY p.created_at DESC, p.id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM properties")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }
}
