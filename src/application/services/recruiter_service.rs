use crate::application::client::Client;
use crate::application::interfaces::recruiter::RecruiterService;
use crate::application::services::{optional, path_id};
use crate::error::AppError;
use crate::model::requests::RequestOptions;
use crate::model::responses::Page;
use crate::presentation::company::Company;
use crate::presentation::job::{Application, ApplicationStatus, Job, NewJob};
use crate::presentation::recruiter::RecruiterProfile;
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

#[async_trait]
impl RecruiterService for Client {
    async fn get_recruiter_profile(&self) -> Result<RecruiterProfile, AppError> {
        self.http().get("recruiters/profile").await
    }

    async fn get_my_company(&self) -> Result<Option<Company>, AppError> {
        optional(self.http().get("recruiters/company").await)
    }

    async fn save_company(&self, company: &Company) -> Result<Company, AppError> {
        info!("Saving company: {}", company.name);
        self.http().post("recruiters/company", company).await
    }

    async fn create_job(&self, job: &NewJob) -> Result<Job, AppError> {
        if job.title.trim().is_empty() {
            return Err(AppError::InvalidInput("job title is required".to_string()));
        }
        info!("Creating job: {}", job.title);
        let created: Job = self
            .http()
            .request(Method::POST, "jobs", Some(job), &job.skill_options())
            .await?;
        debug!("Job created: {}", created.id);
        Ok(created)
    }

    async fn get_my_jobs(&self, page: u32, size: u32) -> Result<Page<Job>, AppError> {
        self.http()
            .get_with("jobs/my-jobs", &RequestOptions::new().paged(page, size))
            .await
    }

    async fn get_job_applicants(
        &self,
        job_id: &str,
        page: u32,
        size: u32,
    ) -> Result<Page<Application>, AppError> {
        let path = format!("applications/job/{}", path_id("job id", job_id)?);
        let result: Page<Application> = self
            .http()
            .get_with(&path, &RequestOptions::new().paged(page, size))
            .await?;
        debug!("Applicants for job {}: {}", job_id, result.total_elements);
        Ok(result)
    }

    async fn update_application_status(
        &self,
        application_id: &str,
        status: ApplicationStatus,
        note: Option<&str>,
    ) -> Result<Application, AppError> {
        let path = format!(
            "applications/{}/status",
            path_id("application id", application_id)?
        );
        let options = RequestOptions::new()
            .query("status", status.as_str())
            .query_opt("notes", note);
        info!("Moving application {} to {}", application_id, status.as_str());
        self.http().put_empty(&path, &options).await
    }
}
