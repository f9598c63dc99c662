use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Property {
    pub id: i64,
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub property_type: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub max_guests: i64,
    pub price_per_night: f64,
    pub status: String,
    pub owner_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Property row joined with the owner's display name for list views.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct PropertyWithOwner {
    pub id: i64,
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub property_type: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub max_guests: i64,
    pub price_per_night: f64,
    pub status: String,
    pub owner_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_name: Option<String>,
}

#[derive(Debug)]
pub struct NewProperty {
    pub name: String,
    pub address: String,
    pub property_type: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub max_guests: i64,
    pub price_per_night: f64,
    pub owner_id: Option<i64>,
}
