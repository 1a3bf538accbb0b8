use crate::error::AppError;
use crate::model::requests::FilePart;
use crate::presentation::student::{Cv, CvAnalysis, RoadmapRequest, StudentProfile};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the student profile, CVs and AI career tools
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Gets the current student's profile
    async fn get_profile(&self) -> Result<StudentProfile, AppError>;

    /// Updates the profile; unset fields are not sent
    async fn update_profile(&self, profile: &StudentProfile) -> Result<StudentProfile, AppError>;

    /// Lists uploaded CVs
    async fn get_cvs(&self) -> Result<Vec<Cv>, AppError>;

    /// Uploads a CV file
    async fn upload_cv(&self, file: &FilePart) -> Result<Cv, AppError>;

    /// Deletes a CV
    async fn delete_cv(&self, cv_id: &str) -> Result<(), AppError>;

    /// Runs the AI analysis of a CV
    async fn analyze_cv(&self, cv_id: &str) -> Result<CvAnalysis, AppError>;

    /// Generates a career roadmap
    ///
    /// The roadmap layout is produced by a language model and returned as raw JSON.
    async fn generate_roadmap(&self, request: &RoadmapRequest) -> Result<Value, AppError>;
}
