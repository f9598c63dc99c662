use crate::domain::models::{
    booking::{Booking, BookingDetail, BookingSummary, NewBooking},
    message::{Message, MessageWithContext, NewMessage},
    property::{NewProperty, PropertyWithOwner},
    task::{NewTask, Task, TaskWithContext},
    user::{NewUser, User},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn create(&self, property: &NewProperty) -> Result<i64, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<PropertyWithOwner>, AppError>;
    async fn list(&self) -> Result<Vec<PropertyWithOwner>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &NewBooking) -> Result<i64, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<BookingDetail>, AppError>;
    async fn list(&self) -> Result<Vec<BookingSummary>, AppError>;
    async fn list_by_property(&self, property_id: i64) -> Result<Vec<Booking>, AppError>;
    async fn update_status(&self, id: i64, status: &str) -> Result<(), AppError>;
    async fn count_by_status(&self, status: &str) -> Result<i64, AppError>;
    /// Sum of total_amount over confirmed and completed bookings, 0 when none.
    async fn revenue_total(&self) -> Result<f64, AppError>;
    async fn recent(&self, limit: i64) -> Result<Vec<BookingSummary>, AppError>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: &NewMessage) -> Result<i64, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, AppError>;
    async fn list(&self) -> Result<Vec<MessageWithContext>, AppError>;
    async fn list_by_booking(&self, booking_id: i64) -> Result<Vec<Message>, AppError>;
    async fn mark_read(&self, id: i64) -> Result<(), AppError>;
    async fn count_unread(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create(&self, task: &NewTask) -> Result<i64, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError>;
    async fn list(&self) -> Result<Vec<TaskWithContext>, AppError>;
    async fn list_by_booking(&self, booking_id: i64) -> Result<Vec<Task>, AppError>;
    async fn update_status(&self, id: i64, status: &str) -> Result<(), AppError>;
    async fn count_pending(&self) -> Result<i64, AppError>;
    /// Pending tasks ordered by soonest due date, bounded for the dashboard.
    async fn pending_soonest(&self, limit: i64) -> Result<Vec<TaskWithContext>, AppError>;
}
