use crate::application::client::Client;
use crate::application::interfaces::notification::NotificationService;
use crate::application::services::path_id;
use crate::error::AppError;
use crate::model::requests::RequestOptions;
use crate::model::responses::{CountResponse, Page};
use crate::presentation::notification::Notification;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

#[async_trait]
impl NotificationService for Client {
    async fn get_notifications(&self, page: u32, size: u32) -> Result<Page<Notification>, AppError> {
        self.http()
            .get_with("notifications", &RequestOptions::new().paged(page, size))
            .await
    }

    async fn get_unread_count(&self) -> Result<u64, AppError> {
        let unread: CountResponse = self.http().get("notifications/unread-count").await?;
        debug!("Unread notifications: {}", unread.count);
        Ok(unread.count)
    }

    async fn mark_as_read(&self, notification_id: &str) -> Result<(), AppError> {
        let path = format!(
            "notifications/{}/read",
            path_id("notification id", notification_id)?
        );
        let _: Value = self.http().put_empty(&path, &RequestOptions::default()).await?;
        Ok(())
    }

    async fn mark_all_as_read(&self) -> Result<(), AppError> {
        let _: Value = self
            .http()
            .put_empty("notifications/mark-all-read", &RequestOptions::default())
            .await?;
        Ok(())
    }
}
