use crate::model::requests::RequestOptions;
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Community article
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Article identifier
    pub id: String,
    /// Author
    #[serde(default)]
    pub author_id: Option<String>,
    /// Title
    #[serde(default)]
    pub title: String,
    /// Body
    #[serde(default)]
    pub content: Option<String>,
    /// Short summary
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Category
    #[serde(default)]
    pub category: Option<String>,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cover image
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// `PENDING`, `PUBLISHED`, `REJECTED` or `HIDDEN`
    #[serde(default)]
    pub status: Option<String>,
    /// Publication time
    #[serde(default)]
    pub published_at: Option<NaiveDateTime>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Views
    #[serde(default)]
    pub views_count: Option<u64>,
    /// Reactions
    #[serde(default)]
    pub reactions_count: Option<u64>,
    /// Comments
    #[serde(default)]
    pub comments_count: Option<u64>,
}

/// Article submitted for review
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    /// Title
    pub title: String,
    /// Body
    pub content: String,
    /// Short summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Tags
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Cover image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Filters for `GET /articles`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    /// Free text
    pub keyword: Option<String>,
    /// Category filter
    pub category: Option<String>,
    /// Zero-based page
    pub page: u32,
    /// Page size
    pub size: u32,
}

impl Default for ArticleQuery {
    fn default() -> Self {
        Self {
            keyword: None,
            category: None,
            page: 0,
            size: 20,
        }
    }
}

impl ArticleQuery {
    /// First page of 20, no filters
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

    /// Sets the category filter
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Selects a page
    #[must_use]
    pub fn page(mut self, page: u32, size: u32) -> Self {
        self.page = page;
        self.size = size;
        self
    }

    /// Query parameters for the request
    #[must_use]
    pub fn to_options(&self) -> RequestOptions {
        RequestOptions::new()
            .query_opt("keyword", self.keyword.as_deref())
            .query_opt("category", self.category.as_deref())
            .paged(self.page, self.size)
    }
}

/// Author shown next to a comment
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    /// User identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Avatar
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Comment thread entry
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleComment {
    /// Comment identifier
    pub id: String,
    /// Author
    #[serde(default)]
    pub user: Option<CommentAuthor>,
    /// Text
    #[serde(default)]
    pub content: String,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Nested replies
    #[serde(default)]
    pub replies: Vec<ArticleComment>,
}

/// Body of `POST /articles/{id}/comments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewComment<'a> {
    pub content: &'a str,
    pub parent_comment_id: Option<&'a str>,
}

/// Reaction on an article
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionKind {
    /// Like
    #[default]
    Like,
    /// Love
    Love,
    /// Laugh
    Haha,
    /// Surprise
    Wow,
    /// Sadness
    Sad,
    /// Anger
    Angry,
}

impl ReactionKind {
    /// Wire name of the reaction
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Like => "LIKE",
            ReactionKind::Love => "LOVE",
            ReactionKind::Haha => "HAHA",
            ReactionKind::Wow => "WOW",
            ReactionKind::Sad => "SAD",
            ReactionKind::Angry => "ANGRY",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reaction state returned after a toggle; `null` when the reaction was removed
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleReaction {
    /// Reaction identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Reaction kind
    #[serde(default)]
    pub reaction_type: Option<ReactionKind>,
    /// Time of the reaction
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
