pub mod sqlite_booking_repo;
pub mod sqlite_message_repo;
pub mod sqlite_property_repo;
pub mod sqlite_task_repo;
pub mod sqlite_user_repo;
