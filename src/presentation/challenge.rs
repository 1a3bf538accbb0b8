use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Gamified challenge
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Challenge identifier
    pub id: String,
    /// Title
    #[serde(default)]
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Category
    #[serde(default)]
    pub category: Option<String>,
    /// Difficulty label
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Badge awarded on completion
    #[serde(default)]
    pub badge_id: Option<String>,
    /// Opening time
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    /// Closing time
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    /// Minimum score to pass, in percent
    #[serde(default)]
    pub passing_score: Option<u32>,
    /// How to complete the challenge
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, DisplaySimple, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// State of a participation
pub enum ParticipationStatus {
    /// Joined, not finished
    #[default]
    InProgress,
    /// Finished successfully
    Completed,
    /// Finished below the passing score
    Failed,
}

/// Participation of the current student in a challenge
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    /// Participation identifier
    pub id: String,
    /// Challenge joined
    #[serde(default)]
    pub challenge: Option<Challenge>,
    /// State
    #[serde(default)]
    pub status: ParticipationStatus,
    /// Join time
    #[serde(default)]
    pub joined_at: Option<NaiveDateTime>,
    /// Completion time
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, DisplaySimple, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// How rare a badge is
pub enum BadgeRarity {
    /// Common
    #[default]
    Common,
    /// Rare
    Rare,
    /// Epic
    Epic,
    /// Legendary
    Legendary,
}

/// Badge earned by completing challenges
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Badge identifier
    pub id: String,
    /// Name
    #[serde(default)]
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Icon
    #[serde(default)]
    pub icon_url: Option<String>,
    /// Category
    #[serde(default)]
    pub category: Option<String>,
    /// Rarity
    #[serde(default)]
    pub rarity: BadgeRarity,
}
