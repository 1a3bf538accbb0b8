use crate::error::AppError;
use crate::model::responses::Page;
use crate::presentation::company::Company;
use crate::presentation::job::{Application, ApplicationStatus, Job, NewJob};
use crate::presentation::recruiter::RecruiterProfile;
use async_trait::async_trait;

/// Interface for the recruiter dashboard
#[async_trait]
pub trait RecruiterService: Send + Sync {
    /// Gets the current recruiter's profile
    async fn get_recruiter_profile(&self) -> Result<RecruiterProfile, AppError>;

    /// Company of the current recruiter; `None` before one is created
    async fn get_my_company(&self) -> Result<Option<Company>, AppError>;

    /// Creates or updates the recruiter's company
    async fn save_company(&self, company: &Company) -> Result<Company, AppError>;

    /// Publishes a job, pending admin approval
    async fn create_job(&self, job: &NewJob) -> Result<Job, AppError>;

    /// Lists jobs posted by the current recruiter
    async fn get_my_jobs(&self, page: u32, size: u32) -> Result<Page<Job>, AppError>;

    /// Lists applications received for a job
    async fn get_job_applicants(
        &self,
        job_id: &str,
        page: u32,
        size: u32,
    ) -> Result<Page<Application>, AppError>;

    /// Moves an application to a new status with an optional note
    async fn update_application_status(
        &self,
        application_id: &str,
        status: ApplicationStatus,
        note: Option<&str>,
    ) -> Result<Application, AppError>;
}
