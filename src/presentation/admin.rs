use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Platform-wide counters for the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    /// All users
    pub total_users: u64,
    /// Students
    pub total_students: u64,
    /// Recruiters
    pub total_recruiters: u64,
    /// Admins
    pub total_admins: u64,
    /// All jobs
    pub total_jobs: u64,
    /// Jobs awaiting approval
    pub pending_jobs: u64,
    /// Published jobs
    pub active_jobs: u64,
    /// Applications
    pub total_applications: u64,
    /// Companies
    pub total_companies: u64,
    /// Articles
    pub total_articles: u64,
    /// Articles awaiting approval
    pub pending_articles: u64,
    /// Published articles
    pub published_articles: u64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, DisplaySimple, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Account state managed by admins
pub enum UserStatus {
    /// Can sign in
    Active,
    /// Blocked by an admin
    Inactive,
    /// Blocked for a policy violation
    Banned,
}

impl UserStatus {
    /// Wire name of the status
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Banned => "BANNED",
        }
    }
}

/// User as listed in the admin panel
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// User identifier
    pub id: String,
    /// Email
    #[serde(default)]
    pub email: String,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Phone
    #[serde(default)]
    pub phone: Option<String>,
    /// Avatar
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Role name
    #[serde(default)]
    pub role: Option<String>,
    /// Account state
    #[serde(default)]
    pub status: Option<String>,
    /// Whether the email was confirmed
    #[serde(default)]
    pub email_verified: Option<bool>,
    /// Registration time
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
