use crate::application::client::Client;
use crate::application::interfaces::job::JobService;
use crate::application::services::path_id;
use crate::error::AppError;
use crate::model::requests::RequestOptions;
use crate::model::responses::Page;
use crate::presentation::job::{Application, ApplicationCheck, ApplyRequest, Job, JobSearchQuery};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl JobService for Client {
    async fn search_jobs(&self, query: &JobSearchQuery) -> Result<Page<Job>, AppError> {
        info!("Searching jobs: {:?}", query.keyword);
        let result: Page<Job> = self.http().get_with("jobs", &query.to_options()).await?;
        debug!(
            "Jobs found: {} of {} total",
            result.content.len(),
            result.total_elements
        );
        Ok(result)
    }

    async fn get_job(&self, job_id: &str) -> Result<Job, AppError> {
        let path = format!("jobs/{}", path_id("job id", job_id)?);
        debug!("Getting job: {}", job_id);
        self.http().get(&path).await
    }

    async fn check_application(&self, job_id: &str) -> Result<ApplicationCheck, AppError> {
        let path = format!("applications/check/{}", path_id("job id", job_id)?);
        self.http().get(&path).await
    }

    async fn apply_for_job(&self, request: &ApplyRequest) -> Result<Application, AppError> {
        path_id("job id", &request.job_id)?;
        info!("Applying for job: {}", request.job_id);
        let application: Application = self
            .http()
            .post_empty("applications", &request.to_options())
            .await?;
        debug!("Application created: {}", application.id);
        Ok(application)
    }

    async fn get_applications(&self, page: u32, size: u32) -> Result<Page<Application>, AppError> {
        debug!("Getting applications, page {}", page);
        self.http()
            .get_with("applications", &RequestOptions::new().paged(page, size))
            .await
    }
}
