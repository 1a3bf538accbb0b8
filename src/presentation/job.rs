use crate::model::requests::RequestOptions;
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, DisplaySimple, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Moderation state of a job posting
pub enum JobStatus {
    /// Saved but not submitted
    Draft,
    /// Waiting for admin approval
    #[default]
    Pending,
    /// Visible to students
    Active,
    /// No longer accepting applications
    Closed,
    /// Refused by an admin
    Rejected,
    /// Hidden by an admin
    Hidden,
    /// A state this client does not know about
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, DisplaySimple, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Progress of a job application
pub enum ApplicationStatus {
    /// Submitted, not yet opened
    #[default]
    Pending,
    /// Opened by the recruiter
    Viewed,
    /// Kept for the next round
    Shortlisted,
    /// Interview scheduled
    Interview,
    /// Offer made
    Offered,
    /// Turned down
    Rejected,
    /// Withdrawn by the student
    Withdrawn,
    /// A state this client does not know about
    #[serde(other)]
    Unknown,
}

impl ApplicationStatus {
    /// Wire name of the status
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Viewed => "VIEWED",
            ApplicationStatus::Shortlisted => "SHORTLISTED",
            ApplicationStatus::Interview => "INTERVIEW",
            ApplicationStatus::Offered => "OFFERED",
            ApplicationStatus::Rejected => "REJECTED",
            ApplicationStatus::Withdrawn => "WITHDRAWN",
            ApplicationStatus::Unknown => "UNKNOWN",
        }
    }
}

/// Job posting
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Job identifier
    pub id: String,
    /// Position title
    #[serde(default)]
    pub title: String,
    /// Full description
    #[serde(default)]
    pub description: Option<String>,
    /// Candidate requirements
    #[serde(default)]
    pub requirements: Option<String>,
    /// Work location
    #[serde(default)]
    pub location: Option<String>,
    /// Contract type, e.g. `FULL_TIME`
    #[serde(default)]
    pub job_type: Option<String>,
    /// Seniority, e.g. `JUNIOR`
    #[serde(default)]
    pub experience_level: Option<String>,
    /// Lower salary bound
    #[serde(default)]
    pub min_salary: Option<f64>,
    /// Upper salary bound
    #[serde(default)]
    pub max_salary: Option<f64>,
    /// Salary currency
    #[serde(default)]
    pub currency: Option<String>,
    /// Moderation state
    #[serde(default)]
    pub status: Option<JobStatus>,
    /// Number of views
    #[serde(default)]
    pub views_count: Option<u32>,
    /// Number of applications received
    #[serde(default)]
    pub applications_count: Option<u32>,
    /// Closing date
    #[serde(default)]
    pub expires_at: Option<NaiveDateTime>,
    /// Publication date
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Hiring company identifier
    #[serde(default)]
    pub company_id: Option<String>,
    /// Hiring company name
    #[serde(default)]
    pub company_name: Option<String>,
    /// Hiring company logo
    #[serde(default)]
    pub company_logo_url: Option<String>,
    /// Mandatory skills
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Nice-to-have skills
    #[serde(default)]
    pub optional_skills: Vec<String>,
}

/// Job posting created by a recruiter
///
/// Skills travel as repeated `requiredSkills` / `optionalSkills` query parameters,
/// everything else as the JSON body.
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    /// Position title
    pub title: String,
    /// Full description
    pub description: String,
    /// Candidate requirements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    /// Work location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Contract type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    /// Seniority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    /// Lower salary bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<f64>,
    /// Upper salary bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<f64>,
    /// Salary currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Closing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDateTime>,
    /// Mandatory skills
    #[serde(skip)]
    pub required_skills: Vec<String>,
    /// Nice-to-have skills
    #[serde(skip)]
    pub optional_skills: Vec<String>,
}

impl NewJob {
    /// Query pairs carrying the skill lists
    #[must_use]
    pub fn skill_options(&self) -> RequestOptions {
        let required = self
            .required_skills
            .iter()
            .fold(RequestOptions::new(), |options, skill| {
                options.query("requiredSkills", skill)
            });
        self.optional_skills
            .iter()
            .fold(required, |options, skill| options.query("optionalSkills", skill))
    }
}

/// Filters for `GET /jobs`
///
/// ```rust
/// use careermate_client::presentation::job::JobSearchQuery;
///
/// let query = JobSearchQuery::new().keyword("rust").location("Ha Noi").page(1);
/// assert_eq!(query.to_options().query.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSearchQuery {
    /// Free text matched against title and description
    pub keyword: Option<String>,
    /// Location filter
    pub location: Option<String>,
    /// Zero-based page
    pub page: u32,
    /// Page size
    pub size: u32,
}

impl Default for JobSearchQuery {
    fn default() -> Self {
        Self {
            keyword: None,
            location: None,
            page: 0,
            size: crate::constants::DEFAULT_PAGE_SIZE,
        }
    }
}

impl JobSearchQuery {
    /// First page, no filters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keyword filter
    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Sets the location filter
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Selects a page
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Query parameters for the request; blank filters are omitted
    #[must_use]
    pub fn to_options(&self) -> RequestOptions {
        RequestOptions::new()
            .query_opt("keyword", self.keyword.as_deref())
            .query_opt("location", self.location.as_deref())
            .paged(self.page, self.size)
    }
}

/// Application submitted with `POST /applications`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyRequest {
    /// Job being applied for
    pub job_id: String,
    /// CV to attach
    pub cv_id: Option<String>,
    /// Optional cover letter
    pub cover_letter: Option<String>,
}

impl ApplyRequest {
    /// Application without CV or cover letter
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            cv_id: None,
            cover_letter: None,
        }
    }

    /// Attaches a CV
    #[must_use]
    pub fn with_cv(mut self, cv_id: impl Into<String>) -> Self {
        self.cv_id = Some(cv_id.into());
        self
    }

    /// Adds a cover letter
    #[must_use]
    pub fn with_cover_letter(mut self, cover_letter: impl Into<String>) -> Self {
        self.cover_letter = Some(cover_letter.into());
        self
    }

    /// Query parameters for the request
    #[must_use]
    pub fn to_options(&self) -> RequestOptions {
        RequestOptions::new()
            .query("jobId", &self.job_id)
            .query_opt("cvId", self.cv_id.as_deref())
            .query_opt("coverLetter", self.cover_letter.as_deref())
    }
}

/// Job application
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Application identifier
    pub id: String,
    /// Job applied for
    #[serde(default)]
    pub job_id: Option<String>,
    /// Title of the job
    #[serde(default)]
    pub job_title: Option<String>,
    /// Applicant profile
    #[serde(default)]
    pub student_id: Option<String>,
    /// Applicant name
    #[serde(default)]
    pub student_name: Option<String>,
    /// Attached CV
    #[serde(default)]
    pub cv_id: Option<String>,
    /// Cover letter
    #[serde(default)]
    pub cover_letter: Option<String>,
    /// Progress
    #[serde(default)]
    pub status: ApplicationStatus,
    /// AI match score
    #[serde(default)]
    pub match_score: Option<f64>,
    /// AI notes for the recruiter
    #[serde(default)]
    pub ai_notes: Option<String>,
    /// Submission time
    #[serde(default)]
    pub applied_at: Option<NaiveDateTime>,
    /// First view by the recruiter
    #[serde(default)]
    pub viewed_at: Option<NaiveDateTime>,
    /// Interview time
    #[serde(default)]
    pub interview_scheduled_at: Option<NaiveDateTime>,
}

/// Result of `GET /applications/check/{jobId}`
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCheck {
    /// Whether the current student already applied
    #[serde(default)]
    pub applied: bool,
    /// Existing application
    #[serde(default)]
    pub application_id: Option<String>,
    /// Status of the existing application
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
}
