use crate::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: i64,
    pub property_id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i64,
    pub total_amount: f64,
    pub status: String,
    pub channel: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking joined with its property's name, the shape list views consume.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct BookingSummary {
    pub id: i64,
    pub property_id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i64,
    pub total_amount: f64,
    pub status: String,
    pub channel: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub property_name: String,
}

/// Detail shape: adds the property address on top of the summary.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct BookingDetail {
    pub id: i64,
    pub property_id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i64,
    pub total_amount: f64,
    pub status: String,
    pub channel: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub property_name: String,
    pub property_address: String,
}

/// Bookings arrive through seeding or external channel ingestion, never
/// through a staff-facing route, so validation lives on the params struct
/// rather than a request DTO.
pub struct NewBooking {
    pub property_id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i64,
    pub total_amount: f64,
    pub status: String,
    pub channel: String,
}

impl NewBooking {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut invalid = Vec::new();
        if self.property_id <= 0 {
            invalid.push("property_id");
        }
        if self.guest_name.trim().is_empty() {
            invalid.push("guest_name");
        }
        if self.guest_email.trim().is_empty() {
            invalid.push("guest_email");
        }
        if self.guests <= 0 {
            invalid.push("guests");
        }
        if self.total_amount < 0.0 {
            invalid.push("total_amount");
        }
        if self.check_out < self.check_in {
            invalid.push("check_out");
        }
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Missing or invalid fields: {}",
                invalid.join(", ")
            )))
        }
    }
}
