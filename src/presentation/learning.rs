use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, DisplaySimple, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Course difficulty
pub enum CourseLevel {
    /// No prior knowledge needed
    Beginner,
    /// Some experience expected
    Intermediate,
    /// For experienced learners
    Advanced,
}

/// Course in the catalogue
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course identifier
    pub id: String,
    /// Title
    #[serde(default)]
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Instructor name
    #[serde(default)]
    pub instructor: Option<String>,
    /// Category
    #[serde(default)]
    pub category: Option<String>,
    /// Difficulty
    #[serde(default)]
    pub level: Option<CourseLevel>,
    /// Expected effort
    #[serde(default)]
    pub duration_hours: Option<u32>,
    /// Price, zero for free courses
    #[serde(default)]
    pub price: Option<f64>,
    /// Whether a subscription is required
    #[serde(default)]
    pub is_premium: Option<bool>,
    /// Cover image
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Enrollment of the current student in a course
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Enrollment identifier
    pub id: String,
    /// Enrolled course
    #[serde(default)]
    pub course: Option<Course>,
    /// Completion, 0 to 100
    #[serde(default)]
    pub progress_percentage: Option<f64>,
    /// Enrollment time
    #[serde(default)]
    pub enrolled_at: Option<NaiveDateTime>,
    /// Completion time
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
}

impl Enrollment {
    /// Whether the course has been finished
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Body of the lesson progress update; unset fields are left unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgressUpdate {
    /// Playback position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_time_seconds: Option<u32>,
    /// Marks the lesson as done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Progress of one lesson
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    /// Progress identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Whether the lesson is done
    #[serde(default)]
    pub is_completed: bool,
    /// Total watch time
    #[serde(default)]
    pub watch_time_seconds: u32,
    /// Last playback position
    #[serde(default)]
    pub last_position_seconds: u32,
    /// Completion time
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
}
