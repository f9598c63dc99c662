use crate::domain::{
    models::task::{NewTask, Task, TaskWithContext},
    ports::TaskRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

pub struct SqliteTaskRepo {
    pool: SqlitePool,
}

impl SqliteTaskRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepo {
    async fn create(&self, task: &NewTask) -> Result<i64, AppError> {
        let now = Utc::now();
        let row = sqlx::query(
            "INSERT INTO tasks (property_id, booking_id, title, description, type, assigned_to, due_date, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(task.property_id)
        .bind(task.booking_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.task_type)
        .bind(task.assigned_to)
        .bind(task.due_date)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("id"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<TaskWithContext>, AppError> {
        sqlx::query_as::<_, TaskWithContext>(
            "SELECT t.*, p.name as property_name, u.name as assigned_name
             FROM tasks t
             LEFT JOIN properties p ON t.property_id = p.id
             LEFT JOIN users u ON t.assigned_to = u.id
             ORDER BY t.due_date ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_booking(&self, booking_id: i64) -> Result<Vec<Task>, AppError> {
        sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE booking_id = ? ORDER BY due_date ASC",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE tasks SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Task not found".into()));
        }
        Ok(())
    }

    async fn count_pending(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM tasks WHERE status = 'pending'")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }

    async fn pending_soonest(&self, limit: i64) -> Result<Vec<TaskWithContext>, AppError> {
        sqlx::query_as::<_, TaskWithContext>(
            "SELECT t.*, p.name as property_name, u.name as assigned_name
             FROM tasks t
             LEFT JOIN properties p ON t.property_id = p.id
             LEFT JOIN users u ON t.assigned_to = u.id
             WHERE t.status = 'pending'
             ORDER BY t.due_date ASC
             LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
