use crate::error::AppError;
use crate::model::auth::UserRole;
use crate::model::responses::Page;
use crate::presentation::admin::{DashboardStats, UserAccount, UserStatus};
use crate::presentation::job::Job;
use async_trait::async_trait;

/// Interface for platform administration
#[async_trait]
pub trait AdminService: Send + Sync {
    /// Platform counters
    async fn get_dashboard_stats(&self) -> Result<DashboardStats, AppError>;

    /// Lists users, optionally of one role
    async fn get_users(
        &self,
        role: Option<UserRole>,
        page: u32,
        size: u32,
    ) -> Result<Page<UserAccount>, AppError>;

    /// Activates or blocks a user
    async fn update_user_status(
        &self,
        user_id: &str,
        status: UserStatus,
    ) -> Result<UserAccount, AppError>;

    /// Lists jobs awaiting approval
    async fn get_pending_jobs(&self, page: u32, size: u32) -> Result<Page<Job>, AppError>;

    /// Approves a job
    async fn approve_job(&self, job_id: &str) -> Result<Job, AppError>;

    /// Rejects a job
    async fn reject_job(&self, job_id: &str) -> Result<Job, AppError>;
}
