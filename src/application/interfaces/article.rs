use crate::error::AppError;
use crate::model::responses::Page;
use crate::presentation::article::{
    Article, ArticleComment, ArticleQuery, ArticleReaction, NewArticle, ReactionKind,
};
use async_trait::async_trait;

/// Interface for the community feed
#[async_trait]
pub trait ArticleService: Send + Sync {
    /// Lists published articles
    async fn get_articles(&self, query: &ArticleQuery) -> Result<Page<Article>, AppError>;

    /// Gets one article
    async fn get_article(&self, article_id: &str) -> Result<Article, AppError>;

    /// Submits an article for review
    async fn create_article(&self, article: &NewArticle) -> Result<Article, AppError>;

    /// Lists the comment threads of an article
    async fn get_comments(&self, article_id: &str) -> Result<Vec<ArticleComment>, AppError>;

    /// Comments on an article, or replies to `parent_comment_id`
    async fn add_comment(
        &self,
        article_id: &str,
        content: &str,
        parent_comment_id: Option<&str>,
    ) -> Result<ArticleComment, AppError>;

    /// Adds, switches or removes the current user's reaction
    ///
    /// Returns `None` when the toggle removed the reaction.
    async fn toggle_reaction(
        &self,
        article_id: &str,
        kind: ReactionKind,
    ) -> Result<Option<ArticleReaction>, AppError>;
}
