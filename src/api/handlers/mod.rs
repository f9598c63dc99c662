pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod message;
pub mod property;
pub mod task;
