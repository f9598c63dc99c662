use crate::domain::models::{
    auth::CurrentUser,
    booking::{Booking, BookingDetail, BookingSummary},
    message::Message,
    property::PropertyWithOwner,
    task::{Task, TaskWithContext},
};
use serde::Serialize;

/// The five scalar aggregates the dashboard shows. Field names stay
/// camelCase because that is what the presentation layer binds to.
#[derive(Serialize)]
pub struct DashboardStats {
    #[serde(rename = "totalProperties")]
    pub total_properties: i64,
    #[serde(rename = "activeBookings")]
    pub active_bookings: i64,
    #[serde(rename = "unreadMessages")]
    pub unread_messages: i64,
    #[serde(rename = "pendingTasks")]
    pub pending_tasks: i64,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub user: CurrentUser,
    pub stats: DashboardStats,
    #[serde(rename = "recentBookings")]
    pub recent_bookings: Vec<BookingSummary>,
    #[serde(rename = "pendingTasks")]
    pub pending_tasks: Vec<TaskWithContext>,
}

#[derive(Serialize)]
pub struct PropertyDetailResponse {
    pub property: PropertyWithOwner,
    pub bookings: Vec<Booking>,
}

#[derive(Serialize)]
pub struct BookingDetailResponse {
    pub booking: BookingDetail,
    pub messages: Vec<Message>,
    pub tasks: Vec<Task>,
}
