use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Recruiter profile
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterProfile {
    /// Profile identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Job title inside the company
    #[serde(default)]
    pub position: Option<String>,
    /// Department
    #[serde(default)]
    pub department: Option<String>,
    /// Contact phone
    #[serde(default)]
    pub phone: Option<String>,
    /// Short biography
    #[serde(default)]
    pub bio: Option<String>,
    /// Company the recruiter belongs to
    #[serde(default)]
    pub company_id: Option<String>,
    /// Company name
    #[serde(default)]
    pub company_name: Option<String>,
}
