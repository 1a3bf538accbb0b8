use crate::model::auth::UserInfo;
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Subscription package
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Package identifier
    pub id: String,
    /// Name
    #[serde(default)]
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Price
    #[serde(default)]
    pub price: Option<f64>,
    /// Validity in days
    #[serde(default)]
    pub duration_days: Option<u32>,
    /// Included features
    #[serde(default)]
    pub features: Vec<String>,
    /// Whether the package can be requested
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Subscription of a user to a package
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Subscription identifier
    pub id: String,
    /// Subscriber
    #[serde(default)]
    pub user_id: Option<String>,
    /// Subscriber details
    #[serde(default)]
    pub user: Option<UserInfo>,
    /// Package identifier
    #[serde(default)]
    pub package_id: Option<String>,
    /// Package details
    #[serde(default)]
    pub package_entity: Option<Package>,
    /// `PENDING`, `APPROVED`, `REJECTED`, `ACTIVE`, `EXPIRED` or `CANCELLED`
    #[serde(default)]
    pub status: String,
    /// Start of validity
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    /// End of validity
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
}

impl Subscription {
    /// Whether the subscription currently grants access
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.status.as_str(), "ACTIVE" | "APPROVED")
    }
}
