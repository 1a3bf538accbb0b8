use crate::error::AppError;
use crate::model::responses::Page;
use crate::presentation::job::{Application, ApplicationCheck, ApplyRequest, Job, JobSearchQuery};
use async_trait::async_trait;

/// Interface for job search and student applications
#[async_trait]
pub trait JobService: Send + Sync {
    /// Searches published jobs
    async fn search_jobs(&self, query: &JobSearchQuery) -> Result<Page<Job>, AppError>;

    /// Gets one job
    async fn get_job(&self, job_id: &str) -> Result<Job, AppError>;

    /// Checks whether the current student already applied for a job
    async fn check_application(&self, job_id: &str) -> Result<ApplicationCheck, AppError>;

    /// Applies for a job
    async fn apply_for_job(&self, request: &ApplyRequest) -> Result<Application, AppError>;

    /// Lists the current student's applications
    async fn get_applications(&self, page: u32, size: u32) -> Result<Page<Application>, AppError>;
}
