use crate::application::client::Client;
use crate::application::interfaces::student::StudentService;
use crate::application::services::path_id;
use crate::error::AppError;
use crate::model::requests::{FilePart, RequestOptions};
use crate::presentation::student::{Cv, CvAnalysis, RoadmapRequest, StudentProfile};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl StudentService for Client {
    async fn get_profile(&self) -> Result<StudentProfile, AppError> {
        debug!("Getting student profile");
        self.http().get("students/profile").await
    }

    async fn update_profile(&self, profile: &StudentProfile) -> Result<StudentProfile, AppError> {
        info!("Updating student profile");
        self.http().put("students/profile", profile).await
    }

    async fn get_cvs(&self) -> Result<Vec<Cv>, AppError> {
        let cvs: Vec<Cv> = self.http().get("students/cv").await?;
        debug!("CVs obtained: {}", cvs.len());
        Ok(cvs)
    }

    async fn upload_cv(&self, file: &FilePart) -> Result<Cv, AppError> {
        info!("Uploading CV: {} ({} bytes)", file.file_name, file.bytes.len());
        let cv: Cv = self
            .http()
            .upload("students/cv/upload", file, &RequestOptions::default())
            .await?;
        debug!("CV uploaded: {}", cv.id);
        Ok(cv)
    }

    async fn delete_cv(&self, cv_id: &str) -> Result<(), AppError> {
        let path = format!("students/cv/{}", path_id("cv id", cv_id)?);
        info!("Deleting CV: {}", cv_id);
        let _: Value = self.http().delete(&path).await?;
        Ok(())
    }

    async fn analyze_cv(&self, cv_id: &str) -> Result<CvAnalysis, AppError> {
        let path = format!("ai/cv/analyze/{}", path_id("cv id", cv_id)?);
        info!("Analyzing CV: {}", cv_id);
        self.http().post_empty(&path, &RequestOptions::default()).await
    }

    async fn generate_roadmap(&self, request: &RoadmapRequest) -> Result<Value, AppError> {
        if request.target_role.trim().is_empty() {
            return Err(AppError::InvalidInput("target role is required".to_string()));
        }
        info!("Generating roadmap for role: {}", request.target_role);
        self.http().post("ai/career/roadmap", request).await
    }
}
