use crate::application::client::Client;
use crate::application::interfaces::admin::AdminService;
use crate::application::services::path_id;
use crate::error::AppError;
use crate::model::auth::UserRole;
use crate::model::requests::RequestOptions;
use crate::model::responses::Page;
use crate::presentation::admin::{DashboardStats, UserAccount, UserStatus};
use crate::presentation::job::Job;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl AdminService for Client {
    async fn get_dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        self.http().get("admin/dashboard/stats").await
    }

    async fn get_users(
        &self,
        role: Option<UserRole>,
        page: u32,
        size: u32,
    ) -> Result<Page<UserAccount>, AppError> {
        let options = RequestOptions::new()
            .query_opt("role", role.map(|r| r.as_str()))
            .paged(page, size);
        let result: Page<UserAccount> = self.http().get_with("admin/users", &options).await?;
        debug!("Users obtained: {} of {}", result.content.len(), result.total_elements);
        Ok(result)
    }

    async fn update_user_status(
        &self,
        user_id: &str,
        status: UserStatus,
    ) -> Result<UserAccount, AppError> {
        let path = format!("admin/users/{}/status", path_id("user id", user_id)?);
        info!("Setting user {} status to {}", user_id, status.as_str());
        self.http()
            .put_empty(&path, &RequestOptions::new().query("status", status.as_str()))
            .await
    }

    async fn get_pending_jobs(&self, page: u32, size: u32) -> Result<Page<Job>, AppError> {
        let options = RequestOptions::new()
            .query("status", "PENDING")
            .paged(page, size);
        self.http().get_with("admin/jobs", &options).await
    }

    async fn approve_job(&self, job_id: &str) -> Result<Job, AppError> {
        let path = format!("admin/jobs/{}/approve", path_id("job id", job_id)?);
        info!("Approving job {}", job_id);
        self.http().post_empty(&path, &RequestOptions::default()).await
    }

    async fn reject_job(&self, job_id: &str) -> Result<Job, AppError> {
        let path = format!("admin/jobs/{}/reject", path_id("job id", job_id)?);
        info!("Rejecting job {}", job_id);
        self.http().post_empty(&path, &RequestOptions::default()).await
    }
}
