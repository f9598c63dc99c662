use crate::config::Config;
use crate::domain::ports::{
    BookingRepository, MessageRepository, PropertyRepository, TaskRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use std::sync::Arc;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub property_repo: Arc<dyn PropertyRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub message_repo: Arc<dyn MessageRepository>,
    pub task_repo: Arc<dyn TaskRepository>,
    pub auth_service: Arc<AuthService>,
    pub templates: Arc<Tera>,
}
