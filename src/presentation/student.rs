use chrono::{NaiveDate, NaiveDateTime};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Student profile, read and written through `/students/profile`
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    /// Profile identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Account email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Birth date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// University
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    /// Field of study
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    /// Graduation year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    /// Grade point average
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    /// Short biography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// LinkedIn profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    /// GitHub profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Portfolio site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    /// Study or job-seeking status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_status: Option<String>,
    /// Declared skills
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<StudentSkill>,
}

/// Skill declared on a profile
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSkill {
    /// Skill name
    #[serde(default)]
    pub skill_name: String,
    /// Self-assessed level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency_level: Option<String>,
    /// Years of practice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<f64>,
}

/// Uploaded CV
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cv {
    /// CV identifier
    pub id: String,
    /// Original file name
    #[serde(default)]
    pub file_name: Option<String>,
    /// Download location
    #[serde(default)]
    pub file_url: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub file_size: Option<u64>,
    /// MIME type
    #[serde(default)]
    pub file_type: Option<String>,
    /// Whether this CV is attached to applications by default
    #[serde(default)]
    pub is_default: Option<bool>,
    /// Raw AI analysis, when one has run
    #[serde(default)]
    pub ai_analysis: Option<Map<String, Value>>,
    /// AI score
    #[serde(default)]
    pub ai_score: Option<f64>,
    /// Upload time
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Result of `POST /ai/cv/analyze/{id}`
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvAnalysis {
    /// Overall assessment
    #[serde(default)]
    pub summary: Option<String>,
    /// Strong points
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Points to improve
    #[serde(default)]
    pub weaknesses: Vec<String>,
    /// Overall score
    #[serde(default, alias = "matchScore")]
    pub score: Option<f64>,
    /// Remaining fields produced by the model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Input of `POST /ai/career/roadmap`
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    /// Skills the student already has
    pub current_skills: Vec<String>,
    /// Role the student aims for
    pub target_role: String,
}

impl RoadmapRequest {
    /// Creates a roadmap request
    pub fn new<S: Into<String>>(current_skills: impl IntoIterator<Item = S>, target_role: impl Into<String>) -> Self {
        Self {
            current_skills: current_skills.into_iter().map(Into::into).collect(),
            target_role: target_role.into(),
        }
    }
}
