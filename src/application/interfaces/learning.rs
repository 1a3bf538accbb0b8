use crate::error::AppError;
use crate::presentation::learning::{Course, Enrollment, LessonProgress, LessonProgressUpdate};
use async_trait::async_trait;

/// Interface for courses and lesson progress
#[async_trait]
pub trait LearningService: Send + Sync {
    /// Lists courses, optionally in one category
    async fn get_courses(&self, category: Option<&str>) -> Result<Vec<Course>, AppError>;

    /// Gets one course
    async fn get_course(&self, course_id: &str) -> Result<Course, AppError>;

    /// Enrolls the current student
    async fn enroll(&self, course_id: &str) -> Result<Enrollment, AppError>;

    /// Lists the current student's enrollments
    async fn get_my_enrollments(&self) -> Result<Vec<Enrollment>, AppError>;

    /// Records playback position or completion of a lesson
    async fn update_lesson_progress(
        &self,
        enrollment_id: &str,
        lesson_id: &str,
        update: &LessonProgressUpdate,
    ) -> Result<LessonProgress, AppError>;
}
