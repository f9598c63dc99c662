use crate::domain::{
    models::message::{Message, MessageWithContext, NewMessage},
    ports::MessageRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

pub struct SqliteMessageRepo {
    pool: SqlitePool,
}

impl SqliteMessageRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for SqliteMessageRepo {
    async fn create(&self, message: &NewMessage) -> Result<i64, AppError> {
        let row = sqlx::query(
            "INSERT INTO messages (booking_id, sender_name, sender_email, message, channel, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(message.booking_id)
        .bind(&message.sender_name)
        .bind(&message.sender_email)
        .bind(&message.body)
        .bind(&message.channel)
        .bind(&message.status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("id"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, AppError> {
        sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<MessageWithContext>, AppError> {
        // id tiebreak keeps most-recent-first stable when timestamps collide
        sqlx::query_as::<_, MessageWithContext>(
            "SELECT m.*, b.guest_name, p.name as property_name
             FROM messages m
             LEFT JOIN bookings b ON m.booking_id = b.id
             LEFT JOIN properties p ON b.property_id = p.id
             ORDER BY m.created_at DESC, m.id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_booking(&self, booking_id: i64) -> Result<Vec<Message>, AppError> {
        sqlx::query_as::<_, Message>(
            "SELECT * FROM messages WHERE booking_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn mark_read(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE messages SET status = 'read' WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Message not found".into()));
        }
        Ok(())
    }

    async fn count_unread(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM messages WHERE status = 'unread'")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }
}
