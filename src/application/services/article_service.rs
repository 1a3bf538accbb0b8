use crate::application::client::Client;
use crate::application::interfaces::article::ArticleService;
use crate::application::services::path_id;
use crate::error::AppError;
use crate::model::requests::RequestOptions;
use crate::model::responses::Page;
use crate::presentation::article::{
    Article, ArticleComment, ArticleQuery, ArticleReaction, NewArticle, NewComment, ReactionKind,
};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl ArticleService for Client {
    async fn get_articles(&self, query: &ArticleQuery) -> Result<Page<Article>, AppError> {
        let result: Page<Article> = self.http().get_with("articles", &query.to_options()).await?;
        debug!("Articles obtained: {}", result.content.len());
        Ok(result)
    }

    async fn get_article(&self, article_id: &str) -> Result<Article, AppError> {
        let path = format!("articles/{}", path_id("article id", article_id)?);
        self.http().get(&path).await
    }

    async fn create_article(&self, article: &NewArticle) -> Result<Article, AppError> {
        info!("Submitting article: {}", article.title);
        self.http().post("articles", article).await
    }

    async fn get_comments(&self, article_id: &str) -> Result<Vec<ArticleComment>, AppError> {
        let path = format!("articles/{}/comments", path_id("article id", article_id)?);
        self.http().get(&path).await
    }

    async fn add_comment(
        &self,
        article_id: &str,
        content: &str,
        parent_comment_id: Option<&str>,
    ) -> Result<ArticleComment, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::InvalidInput("comment is empty".to_string()));
        }
        let path = format!("articles/{}/comments", path_id("article id", article_id)?);
        let body = NewComment {
            content,
            parent_comment_id,
        };
        debug!("Commenting on article {}", article_id);
        self.http().post(&path, &body).await
    }

    async fn toggle_reaction(
        &self,
        article_id: &str,
        kind: ReactionKind,
    ) -> Result<Option<ArticleReaction>, AppError> {
        let path = format!("articles/{}/reactions", path_id("article id", article_id)?);
        let options = RequestOptions::new().query("reactionType", kind);
        let value: Value = self.http().post_empty(&path, &options).await?;
        // A removed reaction comes back as an empty body or a bare message
        if matches!(&value, Value::Object(map) if map.contains_key("id")) {
            Ok(Some(serde_json::from_value(value)?))
        } else {
            Ok(None)
        }
    }
}
