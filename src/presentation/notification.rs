use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// In-app notification
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Notification identifier
    pub id: String,
    /// Heading
    #[serde(default)]
    pub title: String,
    /// Body
    #[serde(default)]
    pub message: Option<String>,
    /// Kind, e.g. `ARTICLE_APPROVED`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// `UNREAD` or `READ`
    #[serde(default)]
    pub status: Option<String>,
    /// Page the notification points to
    #[serde(default)]
    pub link_url: Option<String>,
    /// Kind of the related entity, e.g. `JOB`
    #[serde(default)]
    pub related_entity_type: Option<String>,
    /// Related entity
    #[serde(default)]
    pub related_entity_id: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Notification {
    /// Whether the notification has not been read yet
    #[must_use]
    pub fn is_unread(&self) -> bool {
        self.status.as_deref().is_none_or(|s| s == "UNREAD")
    }
}
