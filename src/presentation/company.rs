use crate::model::requests::RequestOptions;
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Company page, also sent by recruiters to `POST /recruiters/company`
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company identifier; empty when creating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Company name
    #[serde(default)]
    pub name: String,
    /// Website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// About the company
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Headcount band, e.g. `50-100`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Industry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Year founded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    /// Logo location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Student review of a company
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRating {
    /// Rating identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Stars, 1 to 5
    #[serde(default)]
    pub rating: u8,
    /// Review text
    #[serde(default)]
    pub review_text: Option<String>,
    /// Submission time
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Rating submitted for a company
///
/// The backend reads `rating` and `reviewText` as query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingRequest {
    /// Stars, 1 to 5
    pub rating: u8,
    /// Optional review
    pub review_text: Option<String>,
}

impl RatingRequest {
    /// Rating without review text
    #[must_use]
    pub fn new(rating: u8) -> Self {
        Self {
            rating,
            review_text: None,
        }
    }

    /// Adds review text
    #[must_use]
    pub fn with_review(mut self, review_text: impl Into<String>) -> Self {
        self.review_text = Some(review_text.into());
        self
    }

    /// Whether the star count is within 1 to 5
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (1..=5).contains(&self.rating)
    }

    /// Query parameters for the request
    #[must_use]
    pub fn to_options(&self) -> RequestOptions {
        RequestOptions::new()
            .query("rating", self.rating)
            .query_opt("reviewText", self.review_text.as_deref())
    }
}

/// `{ "averageRating": x }`
#[derive(Debug, Clone, Copy, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageRating {
    /// Mean of all ratings; absent when the company has none
    #[serde(default)]
    pub average_rating: Option<f64>,
}
