use crate::application::client::Client;
use crate::application::interfaces::learning::LearningService;
use crate::application::services::path_id;
use crate::error::AppError;
use crate::model::requests::RequestOptions;
use crate::presentation::learning::{Course, Enrollment, LessonProgress, LessonProgressUpdate};
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

#[async_trait]
impl LearningService for Client {
    async fn get_courses(&self, category: Option<&str>) -> Result<Vec<Course>, AppError> {
        let options = RequestOptions::new().query_opt("category", category);
        let courses: Vec<Course> = self.http().get_with("courses", &options).await?;
        debug!("Courses obtained: {}", courses.len());
        Ok(courses)
    }

    async fn get_course(&self, course_id: &str) -> Result<Course, AppError> {
        let path = format!("courses/{}", path_id("course id", course_id)?);
        self.http().get(&path).await
    }

    async fn enroll(&self, course_id: &str) -> Result<Enrollment, AppError> {
        let path = format!("courses/{}/enroll", path_id("course id", course_id)?);
        info!("Enrolling in course {}", course_id);
        self.http().post_empty(&path, &RequestOptions::default()).await
    }

    async fn get_my_enrollments(&self) -> Result<Vec<Enrollment>, AppError> {
        self.http().get("courses/my-enrollments").await
    }

    async fn update_lesson_progress(
        &self,
        enrollment_id: &str,
        lesson_id: &str,
        update: &LessonProgressUpdate,
    ) -> Result<LessonProgress, AppError> {
        let path = format!(
            "course-content/enrollments/{}/lessons/{}/progress",
            path_id("enrollment id", enrollment_id)?,
            path_id("lesson id", lesson_id)?
        );
        debug!("Updating lesson {} progress: {:?}", lesson_id, update);
        self.http()
            .request(Method::PUT, &path, Some(update), &RequestOptions::default())
            .await
    }
}
