use crate::error::AppError;
use crate::model::responses::Page;
use crate::presentation::notification::Notification;
use async_trait::async_trait;

/// Interface for in-app notifications
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Lists notifications, newest first
    async fn get_notifications(&self, page: u32, size: u32) -> Result<Page<Notification>, AppError>;

    /// Number of unread notifications
    async fn get_unread_count(&self) -> Result<u64, AppError>;

    /// Marks one notification as read
    async fn mark_as_read(&self, notification_id: &str) -> Result<(), AppError>;

    /// Marks every notification as read
    async fn mark_all_as_read(&self) -> Result<(), AppError>;
}
