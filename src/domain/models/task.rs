use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Task {
    pub id: i64,
    pub property_id: Option<i64>,
    pub booking_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub task_type: String,
    pub status: String,
    pub assigned_to: Option<i64>,
    pub due_date: Option<NaiveDateTime>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Task joined with property and assignee labels for the board view.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct TaskWithContext {
    pub id: i64,
    pub property_id: Option<i64>,
    pub booking_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub task_type: String,
    pub status: String,
    pub assigned_to: Option<i64>,
    pub due_date: Option<NaiveDateTime>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub property_name: Option<String>,
    pub assigned_name: Option<String>,
}

#[derive(Debug)]
pub struct NewTask {
    pub property_id: Option<i64>,
    pub booking_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub task_type: String,
    pub assigned_to: Option<i64>,
    pub due_date: Option<NaiveDateTime>,
}
