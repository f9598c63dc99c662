pub mod auth;
pub mod booking;
pub mod message;
pub mod property;
pub mod task;
pub mod user;
