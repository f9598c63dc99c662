use crate::domain::{
    models::booking::{Booking, BookingDetail, BookingSummary, NewBooking},
    ports::BookingRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &NewBooking) -> Result<i64, AppError> {
        let now = Utc::now();
        let row = sqlx::query(
            "INSERT INTO bookings (property_id, guest_name, guest_email, guest_phone, check_in, check_out, guests, total_amount, status, channel, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(booking.property_id)
        .bind(&booking.guest_name)
        .bind(&booking.guest_email)
        .bind(&booking.guest_phone)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.guests)
        .bind(booking.total_amount)
        .bind(&booking.status)
        .bind(&booking.channel)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("id"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BookingDetail>, AppError> {
        sqlx::query_as::<_, BookingDetail>(
            "SELECT b.*, p.name as property_name, p.address as property_address
             FROM bookings b
             JOIN properties p ON b.property_id = p.id
             WHERE b.id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<BookingSummary>, AppError> {
        sqlx::query_as::<_, BookingSummary>(
            "SELECT b.*, p.name as property_name
             FROM bookings b
             JOIN properties p ON b.property_id = p.id
             ORDER BY b.check_in DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_property(&self, property_id: i64) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE property_id = ? ORDER BY check_in DESC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE bookings SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking not found".into()));
        }
        Ok(())
    }

    async fn count_by_status(&self, status: &str) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM bookings WHERE status = ?")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }

    async fn revenue_total(&self) -> Result<f64, AppError> {
        let row = sqlx::query(
            "SELECT COALESCE(SUM(total_amount), 0.0) as revenue
             FROM bookings WHERE status IN ('confirmed', 'completed')",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.get::<f64, _>("revenue"))
    }

    async fn recent(&self, limit: i64) -> Result<Vec<BookingSummary>, AppError> {
        sqlx::query_as::<_, BookingSummary>(
            "SELECT b.*, p.name as property_name
             FROM bookings b
             JOIN properties p ON b.property_id = p.id
             ORDER BY b.created_at DESC, b.id DESC
             LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
