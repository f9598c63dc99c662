use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Message {
    pub id: i64,
    pub booking_id: Option<i64>,
    pub sender_name: String,
    pub sender_email: String,
    pub message: String,
    pub channel: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Message joined with booking guest and property labels for the inbox view.
/// Both joins are optional since a message may not belong to a booking.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct MessageWithContext {
    pub id: i64,
    pub booking_id: Option<i64>,
    pub sender_name: String,
    pub sender_email: String,
    pub message: String,
    pub channel: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub guest_name: Option<String>,
    pub property_name: Option<String>,
}

pub struct NewMessage {
    pub booking_id: Option<i64>,
    pub sender_name: String,
    pub sender_email: String,
    pub body: String,
    pub channel: String,
    pub status: String,
}
